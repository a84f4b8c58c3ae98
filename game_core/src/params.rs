/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 5.0; // px per frame
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between a paddle and its wall

    // AI
    pub const AI_SPEED_FACTOR: f32 = 0.7; // slightly slower for fairness
    pub const AI_DEAD_ZONE: f32 = 10.0; // no tracking inside this band

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0; // px per frame, per axis

    // Speed ramp
    pub const RAMP_INTERVAL: f64 = 2.0; // seconds between increases
    pub const RAMP_INCREMENT: f32 = 0.1;
    pub const RAMP_MAX: f32 = 2.5;

    // Rebound
    pub const PADDLE_DEFLECT: f32 = 10.0; // scales hit offset into vertical speed
}
