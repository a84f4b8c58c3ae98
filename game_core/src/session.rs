use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, AudioCue, Ball, Config, ControlKey, Events, GameMap,
    GameRng, InputEvent, InputQueue, InputState, Paddle, Score, Side, SpeedRamp, Time,
};

/// Immutable per-frame view of the simulation for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub player_y: f32,
    pub ai_y: f32,
    pub ball_pos: Vec2,
    pub player_score: u32,
    pub ai_score: u32,
    pub paused: bool,
}

/// One running game: the world, its resources, and the pause flag.
///
/// Host callbacks feed events in through the handler methods between
/// frames; `step` applies them and advances the simulation exactly once.
/// Everything is owned here, so tests can run isolated sessions side by
/// side with no shared state.
pub struct GameSession {
    world: World,
    map: GameMap,
    config: Config,
    input_queue: InputQueue,
    input: InputState,
    ramp: SpeedRamp,
    score: Score,
    events: Events,
    rng: GameRng,
    paused: bool,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let map = GameMap::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let spawn_y = map.paddle_spawn(config.paddle_height);
        create_paddle(&mut world, Side::Player, spawn_y, config.paddle_speed);
        create_paddle(&mut world, Side::Ai, spawn_y, config.ai_speed());

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(map.ball_spawn(), config.ball_speed, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            map,
            config,
            input_queue: InputQueue::new(),
            input: InputState::new(),
            ramp: SpeedRamp::new(0.0),
            score: Score::new(),
            events: Events::new(),
            rng,
            paused: false,
        }
    }

    /// Advance one frame at the given timestamp (seconds).
    ///
    /// Returns `false` while paused without touching any state, in which
    /// case the caller must not arm the next frame tick; `resume` re-enters
    /// the loop.
    pub fn step(&mut self, now: f64) -> bool {
        if self.paused {
            return false;
        }
        let time = Time::new(now);
        step(
            &mut self.world,
            &time,
            &self.map,
            &self.config,
            &mut self.input_queue,
            &mut self.input,
            &mut self.ramp,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        true
    }

    /// Key-down handler; unrecognized keys are ignored
    pub fn key_down(&mut self, key: &str) {
        if let Some(key) = ControlKey::from_key(key) {
            self.input_queue.push(InputEvent::KeyDown(key));
        }
    }

    /// Key-up handler; unrecognized keys are ignored
    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = ControlKey::from_key(key) {
            self.input_queue.push(InputEvent::KeyUp(key));
        }
    }

    /// Pointer-move handler, vertical coordinate in playfield space
    pub fn pointer_moved(&mut self, y: f32) {
        self.input_queue.push(InputEvent::PointerMoved(y));
    }

    /// External focus-loss signal; auto-pauses the match
    pub fn focus_lost(&mut self) {
        self.pause();
    }

    /// Idempotent: pausing a paused session is a no-op
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Idempotent: resuming a running session is a no-op
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Presentation snapshot for the most recent frame
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            player_y: 0.0,
            ai_y: 0.0,
            ball_pos: Vec2::ZERO,
            player_score: self.score.player,
            ai_score: self.score.ai,
            paused: self.paused,
        };
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => snapshot.player_y = paddle.y,
                Side::Ai => snapshot.ai_y = paddle.y,
            }
        }
        if let Some((_entity, ball)) = self.world.query::<&Ball>().iter().next() {
            snapshot.ball_pos = ball.pos;
        }
        snapshot
    }

    /// Audio cues raised by the most recent step
    pub fn cues(&self) -> Vec<AudioCue> {
        self.events.cues()
    }

    /// Events raised by the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
