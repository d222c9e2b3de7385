use super::action::Direction;
use super::food::Food;
use super::state::{Position, Segment, Size};

/// Type of collision that killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playfield
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub segments: Vec<Segment>,
    /// Current direction of movement
    pub direction: Direction,
    /// Pixels moved per tick
    pub speed: i32,
    pub alive: bool,
    pub score: u32,
}

impl Snake {
    /// Create a one-segment snake heading right
    pub fn new(head: Position, segment_size: Size, speed: i32) -> Self {
        Self {
            segments: vec![Segment::new(head, segment_size)],
            direction: Direction::Right,
            speed,
            alive: true,
            score: 0,
        }
    }

    /// Put the snake back to its starting shape at `head`
    pub fn reset(&mut self, head: Position) {
        let size = self.segment_size();
        self.segments.clear();
        self.segments.push(Segment::new(head, size));
        self.direction = Direction::Right;
        self.alive = true;
        self.score = 0;
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn tail(&self) -> Segment {
        self.segments[self.segments.len() - 1]
    }

    pub fn segment_size(&self) -> Size {
        self.head().size
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Steer the snake. Reversals and turns after death are ignored.
    /// Returns whether the heading changed.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !self.alive || self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Move the snake one tick inside a `bounds` sized playfield.
    ///
    /// Every body segment takes the position its predecessor had before the
    /// move, then the head steps `speed` pixels. Self-collision compares the
    /// new head against the pre-move positions, not the shifted ones, so the
    /// head can hit the spot the tail is just leaving.
    pub fn advance(&mut self, bounds: Size) -> Option<CollisionType> {
        if !self.alive {
            return None;
        }

        let previous: Vec<Position> = self.segments.iter().map(|s| s.position).collect();

        for i in (1..self.segments.len()).rev() {
            self.segments[i].position = previous[i - 1];
        }

        let head = self.segments[0].position.moved_in_direction(self.direction, self.speed);
        self.segments[0].position = head;

        let collision = if previous[1..].contains(&head) {
            Some(CollisionType::SelfCollision)
        } else if self.is_out_of_bounds(bounds) {
            Some(CollisionType::Wall)
        } else {
            None
        };

        if collision.is_some() {
            self.alive = false;
        }
        collision
    }

    fn is_out_of_bounds(&self, bounds: Size) -> bool {
        let head = self.head();
        head.position.x < 0
            || head.position.x > bounds.width - head.size.width
            || head.position.y < 0
            || head.position.y > bounds.height - head.size.height
    }

    /// Whether the head's box touches the food's box
    pub fn is_touching(&self, food: &Food) -> bool {
        self.head().intersects(food.position, food.size)
    }

    /// Add a segment on top of the current tail. It separates from the tail
    /// on the next tick.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(tail);
    }
}
