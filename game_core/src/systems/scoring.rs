use hecs::World;

use crate::{Ball, Config, Events, GameMap, GameRng, Score, SpeedRamp, Time};

/// Award a point when the ball has left the playfield and reset the rally.
///
/// The ball scores for the AI once its right edge has fully crossed the
/// left boundary, and for the player once its left edge has crossed the
/// right boundary. Reset recenters the ball, re-serves at
/// `ball_speed * multiplier` with a random diagonal, and restarts the ramp
/// timer; whether the multiplier itself drops back to 1 follows
/// `Config::reset_multiplier_on_score`.
#[allow(clippy::too_many_arguments)]
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    time: &Time,
    config: &Config,
    score: &mut Score,
    ramp: &mut SpeedRamp,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exited_left = ball.pos.x + config.ball_size < 0.0;
        let exited_right = ball.pos.x > map.width;
        if !exited_left && !exited_right {
            continue;
        }

        if exited_left {
            score.increment_ai();
            events.ai_scored = true;
        } else {
            score.increment_player();
            events.player_scored = true;
        }

        ramp.restart(time.now, config.reset_multiplier_on_score);
        ball.reset(map.ball_spawn(), config.ball_speed * ramp.multiplier, rng);
    }
}
