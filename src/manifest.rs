//! Slice manifest parsing and validation.
//!
//! A manifest is a JSON description of how one sprite sheet is cut into
//! individual frame files: the source image, the tile size, a scaling flag,
//! and an ordered list of named output rectangles. Parsing validates the
//! whole manifest up front; a bad manifest writes nothing.

use std::fs;
use std::path::{Path, PathBuf};

use glam::UVec2;
use serde::Deserialize;
use tracing::debug;

use crate::constants::TILE_SIZE;
use crate::error::ManifestError;

/// A transform applied to a crop before scaling. Rotations are
/// counter-clockwise, following the sheet manifest convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    FlipH,
    FlipV,
    Rot90,
    Rot180,
    Rot270,
}

/// A named output rectangle within the source sheet.
#[derive(Debug, Clone)]
pub struct SliceSpec {
    pub name: String,
    pub pos: UVec2,
    pub size: UVec2,
    pub transform: Option<Transform>,
}

/// A validated description of how to cut a sprite sheet into frame files.
#[derive(Debug, Clone)]
pub struct SliceManifest {
    /// Path of the source sheet, resolved against the manifest's directory.
    pub source: PathBuf,
    /// Where output files are written: the manifest's own directory.
    pub out_dir: PathBuf,
    pub tile_size: u32,
    pub scale_to_tile: bool,
    pub outputs: Vec<SliceSpec>,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    source: PathBuf,
    tile_size: Option<i64>,
    scale_to_tile: Option<bool>,
    #[serde(default)]
    outputs: Vec<RawSpec>,
}

#[derive(Debug, Deserialize)]
struct RawSpec {
    name: String,
    rect: [i64; 4],
    transform: Option<Transform>,
}

impl SliceManifest {
    /// Reads and validates a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed, the
    /// source image is missing or unreadable, the tile size is not
    /// positive, no outputs are specified, or any output rectangle is
    /// negative, empty, or outside the source image's bounds.
    pub fn load(path: &Path) -> Result<SliceManifest, ManifestError> {
        let data = fs::read_to_string(path)?;
        let raw: RawManifest = serde_json::from_str(&data)?;

        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let source = if raw.source.is_absolute() {
            raw.source.clone()
        } else {
            base.join(&raw.source)
        };
        if !source.exists() {
            return Err(ManifestError::SourceMissing(source));
        }
        let (source_width, source_height) =
            image::image_dimensions(&source).map_err(|_| ManifestError::SourceUnreadable(source.clone()))?;

        let tile_size = raw.tile_size.unwrap_or(TILE_SIZE as i64);
        if tile_size <= 0 {
            return Err(ManifestError::InvalidTileSize(tile_size));
        }

        if raw.outputs.is_empty() {
            return Err(ManifestError::NoOutputs);
        }

        let mut outputs = Vec::with_capacity(raw.outputs.len());
        for spec in raw.outputs {
            let [x, y, width, height] = spec.rect;
            if x < 0 || y < 0 || width < 0 || height < 0 {
                return Err(ManifestError::NegativeRect { name: spec.name });
            }
            if width == 0 || height == 0 {
                return Err(ManifestError::EmptyRect {
                    name: spec.name,
                    width,
                    height,
                });
            }
            if x + width > source_width as i64 || y + height > source_height as i64 {
                return Err(ManifestError::OutOfBounds {
                    name: spec.name,
                    source_width,
                    source_height,
                });
            }

            outputs.push(SliceSpec {
                name: spec.name,
                pos: UVec2::new(x as u32, y as u32),
                size: UVec2::new(width as u32, height as u32),
                transform: spec.transform,
            });
        }

        debug!(outputs = outputs.len(), source = %source.display(), "Parsed slice manifest");

        Ok(SliceManifest {
            source,
            out_dir: base,
            tile_size: tile_size as u32,
            scale_to_tile: raw.scale_to_tile.unwrap_or(true),
            outputs,
        })
    }
}
