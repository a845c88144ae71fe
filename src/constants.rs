//! This module contains the shared constants of the asset pipeline.

use std::time::Duration;

/// The size of each board tile, in pixels. Loaded frames and sliced sheet
/// outputs are scaled to this size unless configured otherwise.
pub const TILE_SIZE: u32 = 20;

/// Nominal display time for frames loaded from discrete numbered files (8 frames per second).
pub const FRAME_DURATION: Duration = Duration::from_millis(125);

/// Ghost frames cycle on a slightly slower clock than Pac-Man's.
pub const GHOST_FRAME_DURATION: Duration = Duration::from_millis(150);

/// The canonical number of numbered teleport frames. Fewer frames still form
/// a valid, shorter animation.
pub const TELEPORT_FRAME_COUNT: usize = 4;
