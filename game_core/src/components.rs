use glam::Vec2;

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Reactive opponent on the right
    Ai,
}

/// Paddle component - top-edge anchored, x fixed per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,     // top edge
    pub speed: f32, // px per frame
}

impl Paddle {
    pub fn new(side: Side, y: f32, speed: f32) -> Self {
        Self { side, y, speed }
    }
}

/// Ball component - top-left anchored square
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reposition to `center` and serve in a random diagonal direction.
    ///
    /// Each velocity component keeps magnitude `speed` and draws its sign
    /// independently, so all four diagonals are equally likely.
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = center;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * speed, sy * speed);
    }
}
