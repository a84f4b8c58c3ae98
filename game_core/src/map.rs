use glam::Vec2;

use crate::params::Params;

/// Playfield bounds
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            width: Params::PLAYFIELD_WIDTH,
            height: Params::PLAYFIELD_HEIGHT,
        }
    }

    /// Clamp a paddle top edge so the whole paddle stays on the playfield
    pub fn clamp_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.height - paddle_height)
    }

    /// Ball reset position (playfield center)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Initial paddle top edge (vertically centered)
    pub fn paddle_spawn(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_y_bounds() {
        let map = GameMap::new();
        assert_eq!(map.clamp_y(-20.0, 80.0), 0.0);
        assert_eq!(map.clamp_y(1000.0, 80.0), map.height - 80.0);
        assert_eq!(map.clamp_y(150.0, 80.0), 150.0, "In-bounds y is unchanged");
    }

    #[test]
    fn test_spawns() {
        let map = GameMap::new();
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 200.0));
        assert_eq!(map.paddle_spawn(80.0), 160.0);
    }
}
