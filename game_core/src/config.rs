use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ramp_interval: f64,
    pub ramp_increment: f32,
    pub ramp_max: f32,
    pub paddle_deflect: f32,
    /// When true, a scoring event drops the speed multiplier back to 1 so
    /// every rally starts at base speed. When false the multiplier carries
    /// over; the ramp timer restarts either way.
    pub reset_multiplier_on_score: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ramp_interval: Params::RAMP_INTERVAL,
            ramp_increment: Params::RAMP_INCREMENT,
            ramp_max: Params::RAMP_MAX,
            paddle_deflect: Params::PADDLE_DEFLECT,
            reset_multiplier_on_score: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.playfield_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// AI paddle speed in px per frame
    pub fn ai_speed(&self) -> f32 {
        self.paddle_speed * self.ai_speed_factor
    }
}
