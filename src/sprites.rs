//! A structured representation of every drawable role in the game.
//!
//! This module provides a set of enums to represent each game element that
//! can be drawn from an image asset, allowing for type-safe lookups and
//! avoiding the use of raw strings. `AssetRole` is the main entry point, and
//! its `base_name` method generates the stem used to derive candidate file
//! names in the asset directory.

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::direction::Direction;

/// The board tiles that can be drawn from an image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TileKind {
    Wall,
    Food,
    Pie,
    Teleport,
    Exit,
}

/// Identity of a drawable game element, used as a lookup key for resolution.
///
/// Ghosts share one set of frames regardless of direction or color;
/// Pac-Man's frames are keyed by direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    Tile(TileKind),
    Pacman(Direction),
    Ghost,
}

impl AssetRole {
    /// Generates the file name stem for the role.
    ///
    /// Candidate file names in the asset directory are derived from this
    /// stem, either directly (`wall` -> `wall.png`) or with a frame index
    /// appended (`pacman_left` -> `pacman_left_0.png`).
    pub fn base_name(self) -> String {
        match self {
            AssetRole::Tile(kind) => kind.as_ref().to_string(),
            AssetRole::Pacman(direction) => format!("pacman_{}", direction.as_ref()),
            AssetRole::Ghost => "ghost".to_string(),
        }
    }

    /// Every role the resolver can be asked for.
    pub fn all() -> impl Iterator<Item = AssetRole> {
        TileKind::iter()
            .map(AssetRole::Tile)
            .chain(Direction::DIRECTIONS.into_iter().map(AssetRole::Pacman))
            .chain(std::iter::once(AssetRole::Ghost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_base_names() {
        assert_eq!(AssetRole::Tile(TileKind::Wall).base_name(), "wall");
        assert_eq!(AssetRole::Tile(TileKind::Food).base_name(), "food");
        assert_eq!(AssetRole::Tile(TileKind::Pie).base_name(), "pie");
        assert_eq!(AssetRole::Tile(TileKind::Teleport).base_name(), "teleport");
        assert_eq!(AssetRole::Tile(TileKind::Exit).base_name(), "exit");
    }

    #[test]
    fn test_pacman_base_names() {
        assert_eq!(AssetRole::Pacman(Direction::Up).base_name(), "pacman_up");
        assert_eq!(AssetRole::Pacman(Direction::Right).base_name(), "pacman_right");
    }

    #[test]
    fn test_ghost_base_name() {
        assert_eq!(AssetRole::Ghost.base_name(), "ghost");
    }

    #[test]
    fn test_all_roles() {
        let roles: Vec<AssetRole> = AssetRole::all().collect();
        // 5 tiles + 4 directions + 1 shared ghost
        assert_eq!(roles.len(), 10);
        assert!(roles.contains(&AssetRole::Ghost));
        assert!(roles.contains(&AssetRole::Tile(TileKind::Teleport)));
        assert!(roles.contains(&AssetRole::Pacman(Direction::Left)));
    }
}
