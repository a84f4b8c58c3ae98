use hecs::World;

use crate::{Ball, Config, Events, GameMap, Paddle, Side, SpeedRamp};

/// Resolve ball collisions against the walls and both paddles.
///
/// Wall bounces reflect `vel.y` with no positional correction, so the ball
/// may overlap a wall for a single frame of travel. Paddle tests only fire
/// while the ball moves toward that paddle; the sign gate is what prevents
/// a second bounce while the ball is still inside the paddle body. Both
/// checks are single-frame positional tests - a fast enough ball can pass
/// a paddle between frames.
pub fn check_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    ramp: &SpeedRamp,
    events: &mut Events,
) {
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls: perfect elastic reflection
        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_size >= map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for &(side, paddle_y) in &paddles {
            let toward = match side {
                Side::Player => ball.vel.x < 0.0,
                Side::Ai => ball.vel.x > 0.0,
            };
            if !toward {
                continue;
            }

            let paddle_x = config.paddle_x(side);
            let overlap = ball.pos.x <= paddle_x + config.paddle_width
                && ball.pos.x + config.ball_size >= paddle_x
                && ball.pos.y <= paddle_y + config.paddle_height
                && ball.pos.y + config.ball_size >= paddle_y;
            if !overlap {
                continue;
            }

            // Rebound angle follows where on the paddle the contact
            // happened, rescaled by the current multiplier so angle
            // strength keeps up with game speed.
            let hit_pos = ((ball.pos.y - paddle_y) / config.paddle_height).clamp(0.0, 1.0);
            ball.vel.x = -ball.vel.x;
            ball.vel.y = (hit_pos - 0.5) * config.paddle_deflect * ramp.multiplier;
            events.ball_hit_paddle = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup() -> (hecs::World, Config, GameMap, SpeedRamp, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new();
        let ramp = SpeedRamp::new(0.0);
        let events = Events::new();
        (world, config, map, ramp, events)
    }

    fn ball_state(world: &hecs::World) -> (Vec2, Vec2) {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.vel))
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, ramp, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, -2.0), Vec2::new(4.0, -5.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(vel.y, 5.0, "Vertical velocity inverted");
        assert_eq!(vel.x, 4.0, "Horizontal velocity unchanged");
        assert_eq!(pos, Vec2::new(400.0, -2.0), "No positional correction");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, ramp, mut events) = setup();
        let start = Vec2::new(400.0, map.height - config.ball_size + 1.0);
        create_ball(&mut world, start, Vec2::new(4.0, 5.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(vel.y, -5.0, "Ball deflects back up");
        assert_eq!(vel.x, 4.0);
        assert_eq!(pos, start);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_bounce_preserves_speed() {
        let (mut world, config, map, ramp, mut events) = setup();
        let vel = Vec2::new(4.0, -5.0);
        create_ball(&mut world, Vec2::new(400.0, 0.0), vel);

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (_pos, after) = ball_state(&world);
        assert!(
            (after.length() - vel.length()).abs() < 1e-6,
            "Wall bounce is elastic"
        );
    }

    #[test]
    fn test_ball_bounces_off_player_paddle() {
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        // Ball at (5, 200) moving (-5, 5) into the left paddle
        create_ball(&mut world, Vec2::new(5.0, 200.0), Vec2::new(-5.0, 5.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (_pos, vel) = ball_state(&world);
        assert_eq!(vel.x, 5.0, "Horizontal velocity inverted");
        // hit_pos = (200 - 180) / 80 = 0.25 -> (0.25 - 0.5) * 10 = -2.5
        assert!((vel.y + 2.5).abs() < 1e-6);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_ai_paddle() {
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Ai, 160.0, config.ai_speed());
        let paddle_x = config.paddle_x(Side::Ai);
        create_ball(
            &mut world,
            Vec2::new(paddle_x - config.ball_size + 2.0, 200.0),
            Vec2::new(5.0, 0.0),
        );

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (_pos, vel) = ball_state(&world);
        assert_eq!(vel.x, -5.0, "Ball deflects back toward the player");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_hit_position_sets_rebound_angle() {
        // Contact near the paddle top sends the ball upward
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        create_ball(&mut world, Vec2::new(15.0, 182.0), Vec2::new(-5.0, 3.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);
        let (_pos, vel) = ball_state(&world);
        assert!(vel.y < 0.0, "Top contact deflects upward");

        // Contact near the paddle bottom sends it downward
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        create_ball(&mut world, Vec2::new(15.0, 250.0), Vec2::new(-5.0, -3.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);
        let (_pos, vel) = ball_state(&world);
        assert!(vel.y > 0.0, "Bottom contact deflects downward");
    }

    #[test]
    fn test_rebound_scales_with_multiplier() {
        let (mut world, config, map, mut ramp, mut events) = setup();
        ramp.multiplier = 2.0;
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        create_ball(&mut world, Vec2::new(5.0, 200.0), Vec2::new(-5.0, 5.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (_pos, vel) = ball_state(&world);
        assert!((vel.y + 5.0).abs() < 1e-6, "Angle strength doubles at 2x");
    }

    #[test]
    fn test_rebound_bounded_by_half_deflect() {
        // Ball overlapping past the paddle edge still yields a bounded angle
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        create_ball(&mut world, Vec2::new(15.0, 172.0), Vec2::new(-5.0, 2.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (_pos, vel) = ball_state(&world);
        let bound = config.paddle_deflect / 2.0 * ramp.multiplier;
        assert!(vel.y.abs() <= bound, "Hit position is clamped to the paddle");
    }

    #[test]
    fn test_no_bounce_when_moving_away() {
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        // Overlapping the paddle but already heading right
        create_ball(&mut world, Vec2::new(15.0, 200.0), Vec2::new(5.0, 2.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        let (_pos, vel) = ball_state(&world);
        assert_eq!(vel, Vec2::new(5.0, 2.0), "Sign gate prevents re-collision");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_miss_above_paddle() {
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);
        create_ball(&mut world, Vec2::new(15.0, 100.0), Vec2::new(-5.0, 0.0));

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        assert!(!events.ball_hit_paddle, "No overlap, no bounce");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, ramp, mut events) = setup();
        create_paddle(&mut world, Side::Player, 180.0, config.paddle_speed);

        check_collisions(&mut world, &map, &config, &ramp, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
