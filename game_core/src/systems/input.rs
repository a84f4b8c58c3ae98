use hecs::World;

use crate::{Config, ControlKey, GameMap, InputEvent, InputQueue, InputState, Paddle, Side};

/// Drain the input inbox into the instantaneous input state.
///
/// Host callbacks only ever enqueue; applying the queue here, at the start
/// of the frame, keeps a single writer per frame for all input state.
pub fn ingest_inputs(input: &mut InputState, queue: &mut InputQueue) {
    for event in queue.events.drain(..) {
        match event {
            InputEvent::KeyDown(ControlKey::Up) => input.up_held = true,
            InputEvent::KeyDown(ControlKey::Down) => input.down_held = true,
            InputEvent::KeyUp(ControlKey::Up) => input.up_held = false,
            InputEvent::KeyUp(ControlKey::Down) => input.down_held = false,
            InputEvent::PointerMoved(y) => {
                input.pointer_y = y;
                input.pointer_moved = true;
            }
        }
    }
}

/// Resolve keyboard and pointer input into the player paddle position.
///
/// Keyboard wins: while a directional key is held the pointer flag is
/// consumed without being applied, so a stale pointer position cannot yank
/// the paddle once the key is released. A set flag positions the paddle
/// center on the pointer instantly, no smoothing.
pub fn move_player_paddle(
    world: &mut World,
    input: &mut InputState,
    map: &GameMap,
    config: &Config,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        if input.any_key_held() {
            if input.up_held {
                paddle.y -= paddle.speed;
            }
            if input.down_held {
                paddle.y += paddle.speed;
            }
            input.pointer_moved = false;
        } else if input.pointer_moved {
            paddle.y = input.pointer_y - config.paddle_height / 2.0;
            input.pointer_moved = false;
        }
        paddle.y = map.clamp_y(paddle.y, config.paddle_height);
    }
}
