//! Offline sprite-sheet slicing: crops named rectangles out of one source
//! image and writes them as individual frame files.
//!
//! This runs once, before the game loop starts, to populate the asset
//! directory consumed by the store at runtime.

use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::{info, warn};

use crate::error::{AssetError, AssetResult, DecodeError};
use crate::manifest::{SliceManifest, SliceSpec, Transform};

/// Cuts every output named by the manifest out of the source sheet, in
/// manifest order, and writes each one to the manifest's directory,
/// overwriting existing files of the same name. Re-running with the same
/// manifest reproduces the same bytes.
///
/// File writes are independent: a failed write is logged and does not stop
/// the remaining outputs, but the run still ends in an error.
pub fn slice(manifest: &SliceManifest) -> AssetResult<Vec<PathBuf>> {
    let sheet = image::open(&manifest.source)
        .map_err(|source| DecodeError::Corrupt {
            name: manifest.source.display().to_string(),
            source,
        })?
        .to_rgba8();

    let total = manifest.outputs.len();
    let mut written = Vec::with_capacity(total);
    let mut failed = 0usize;

    for spec in &manifest.outputs {
        let frame = cut(&sheet, spec, manifest);
        let dest = manifest.out_dir.join(&spec.name);
        match frame.save(&dest) {
            Ok(()) => {
                info!(name = %spec.name, width = frame.width(), height = frame.height(), "Wrote frame");
                written.push(dest);
            }
            Err(err) => {
                warn!(name = %spec.name, %err, "Failed to write frame");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(AssetError::SliceIncomplete { failed, total });
    }
    Ok(written)
}

fn cut(sheet: &RgbaImage, spec: &SliceSpec, manifest: &SliceManifest) -> RgbaImage {
    let crop = imageops::crop_imm(sheet, spec.pos.x, spec.pos.y, spec.size.x, spec.size.y).to_image();

    // imageops rotations are clockwise; the manifest's are counter-clockwise.
    let crop = match spec.transform {
        None => crop,
        Some(Transform::FlipH) => imageops::flip_horizontal(&crop),
        Some(Transform::FlipV) => imageops::flip_vertical(&crop),
        Some(Transform::Rot90) => imageops::rotate270(&crop),
        Some(Transform::Rot180) => imageops::rotate180(&crop),
        Some(Transform::Rot270) => imageops::rotate90(&crop),
    };

    if manifest.scale_to_tile && crop.dimensions() != (manifest.tile_size, manifest.tile_size) {
        imageops::resize(&crop, manifest.tile_size, manifest.tile_size, FilterType::Lanczos3)
    } else {
        crop
    }
}
