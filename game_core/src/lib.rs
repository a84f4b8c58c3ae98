pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// The order is fixed: the inbox is drained first so every event dispatched
/// since the previous frame is visible to this one, paddles move before the
/// ball reads their positions, and scoring runs last so a freshly reset
/// ball is never re-tested against the paddles within the same frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    input_queue: &mut InputQueue,
    input: &mut InputState,
    ramp: &mut SpeedRamp,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Drain the input inbox
    ingest_inputs(input, input_queue);

    // 2. Resolve keyboard/pointer into the player paddle
    move_player_paddle(world, input, map, config);

    // 3. AI tracking
    move_ai_paddle(world, map, config);

    // 4. Speed ramp + integration
    advance_ball(world, time, ramp, config);

    // 5. Wall and paddle collisions
    check_collisions(world, map, config, ramp, events);

    // 6. Scoring and ball reset
    check_scoring(world, map, time, config, score, ramp, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32, speed: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y, speed),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
