use hecs::World;

use crate::{Ball, Config, SpeedRamp, Time};

/// Advance the speed ramp, then integrate the ball position.
///
/// On the frame the multiplier steps up, both velocity components are
/// scaled by the ratio of new to old multiplier, which preserves direction
/// and relative angle. Integration is unconditional, once per frame.
pub fn advance_ball(world: &mut World, time: &Time, ramp: &mut SpeedRamp, config: &Config) {
    let scale = ramp.tick(time.now, config);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(scale) = scale {
            ball.vel *= scale;
        }
        ball.pos += ball.vel;
    }
}
