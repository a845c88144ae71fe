use strum_macros::AsRefStr;

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_direction_lowercase_names() {
        assert_eq!(Direction::Up.as_ref(), "up");
        assert_eq!(Direction::Down.as_ref(), "down");
        assert_eq!(Direction::Left.as_ref(), "left");
        assert_eq!(Direction::Right.as_ref(), "right");
    }

    #[test]
    fn test_directions_constant() {
        assert_eq!(Direction::DIRECTIONS.len(), 4);
        assert!(Direction::DIRECTIONS.contains(&Direction::Up));
        assert!(Direction::DIRECTIONS.contains(&Direction::Down));
        assert!(Direction::DIRECTIONS.contains(&Direction::Left));
        assert!(Direction::DIRECTIONS.contains(&Direction::Right));
    }
}
