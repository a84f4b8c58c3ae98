use crate::config::Config;

/// Injected simulation clock, seconds. The host supplies the timestamp of
/// each frame; the core never reads the wall clock itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub now: f64,
}

impl Time {
    pub fn new(now: f64) -> Self {
        Self { now }
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_ai(&mut self) {
        self.ai += 1;
    }
}

/// Named cues an audio host may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    WallHit,
    PaddleHit,
    ScoreAgainstPlayer,
    ScoreAgainstAi,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_scored: bool,
    pub ai_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Audio cues raised this frame, in a stable order
    pub fn cues(&self) -> Vec<AudioCue> {
        let mut cues = Vec::new();
        if self.ball_hit_wall {
            cues.push(AudioCue::WallHit);
        }
        if self.ball_hit_paddle {
            cues.push(AudioCue::PaddleHit);
        }
        if self.ai_scored {
            cues.push(AudioCue::ScoreAgainstPlayer);
        }
        if self.player_scored {
            cues.push(AudioCue::ScoreAgainstAi);
        }
        cues
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Time-based ball speed ramp.
///
/// The multiplier only moves upward between resets; `tick` reports the
/// velocity rescale factor on the frames where it steps.
#[derive(Debug, Clone, Copy)]
pub struct SpeedRamp {
    pub multiplier: f32,
    pub last_increase: f64,
}

impl SpeedRamp {
    pub fn new(now: f64) -> Self {
        Self {
            multiplier: 1.0,
            last_increase: now,
        }
    }

    /// Advance the ramp. Returns `new / old` when the multiplier increased
    /// this frame so callers can rescale velocity without changing its
    /// direction.
    pub fn tick(&mut self, now: f64, config: &Config) -> Option<f32> {
        if self.multiplier >= config.ramp_max {
            return None;
        }
        if now - self.last_increase < config.ramp_interval {
            return None;
        }
        let old = self.multiplier;
        self.multiplier = (self.multiplier + config.ramp_increment).min(config.ramp_max);
        self.last_increase = now;
        Some(self.multiplier / old)
    }

    /// Restart the ramp timer after a ball reset, optionally dropping the
    /// multiplier back to 1.
    pub fn restart(&mut self, now: f64, reset_multiplier: bool) {
        if reset_multiplier {
            self.multiplier = 1.0;
        }
        self.last_increase = now;
    }
}

/// Control keys recognized by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Up,
    Down,
}

impl ControlKey {
    /// Map a DOM `KeyboardEvent.key` value to a control key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Self::Up),
            "ArrowDown" | "s" | "S" => Some(Self::Down),
            _ => None,
        }
    }
}

/// Input events pushed by host callbacks between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(ControlKey),
    KeyUp(ControlKey),
    PointerMoved(f32),
}

/// Single-threaded input inbox, drained at the start of each step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Instantaneous input state as of the current frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up_held: bool,
    pub down_held: bool,
    pub pointer_y: f32,
    pub pointer_moved: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_key_held(&self) -> bool {
        self.up_held || self.down_held
    }
}
