//! Sprite sheet slicer for the asset directory.
//!
//! Usage: `slice_sheet <manifest.json>`
//!
//! Reads the manifest, cuts the named rectangles out of the source sheet,
//! and writes them next to the manifest. Exits non-zero on any manifest or
//! write failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

use pacman_assets::manifest::SliceManifest;
use pacman_assets::slicer;

fn run(manifest_path: &PathBuf) -> anyhow::Result<usize> {
    let manifest = SliceManifest::load(manifest_path)
        .with_context(|| format!("Invalid manifest {}", manifest_path.display()))?;
    let written = slicer::slice(&manifest)
        .with_context(|| format!("Slicing failed for {}", manifest.source.display()))?;
    Ok(written.len())
}

pub fn main() -> ExitCode {
    // Setup tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    let Some(manifest_path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: slice_sheet <manifest.json>");
        return ExitCode::from(2);
    };

    match run(&manifest_path) {
        Ok(count) => {
            info!(count, "Slicing complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
