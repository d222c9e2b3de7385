use rand::Rng;

use super::state::{Position, Size};

/// The single food item on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub size: Size,
}

impl Food {
    /// Create food at the origin. Call [`Food::respawn`] to place it.
    pub fn new(size: Size) -> Self {
        Self {
            position: Position::default(),
            size,
        }
    }

    /// Move the food to a uniformly random spot that keeps it fully inside
    /// `bounds`. The snake's body is not avoided.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, bounds: Size) {
        let max_x = (bounds.width - self.size.width).max(0);
        let max_y = (bounds.height - self.size.height).max(0);
        self.position = Position::new(rng.gen_range(0..=max_x), rng.gen_range(0..=max_y));
    }
}
