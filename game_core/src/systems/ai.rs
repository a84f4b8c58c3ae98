use hecs::World;

use crate::{Ball, Config, GameMap, Paddle, Side};

/// Step the AI paddle toward the ball.
///
/// Purely reactive: the paddle center chases the ball's top-edge y at its
/// fixed speed and stands still inside the dead-zone, which keeps it from
/// jittering while the ball travels level with it. No prediction, and no
/// scaling with score.
pub fn move_ai_paddle(world: &mut World, map: &GameMap, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Ai {
            continue;
        }
        let center = paddle.y + config.paddle_height / 2.0;
        if ball_y < center - config.ai_dead_zone {
            paddle.y -= paddle.speed;
        } else if ball_y > center + config.ai_dead_zone {
            paddle.y += paddle.speed;
        }
        paddle.y = map.clamp_y(paddle.y, config.paddle_height);
    }
}
