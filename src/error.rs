//! Centralized error types for the asset pipeline.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;
use std::path::PathBuf;

/// Main error type for the asset pipeline.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while slicing or loading assets.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{failed} of {total} outputs could not be written")]
    SliceIncomplete { failed: usize, total: usize },
}

/// Error type for slice manifest parsing and validation.
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Unreadable(#[from] io::Error),

    #[error("Malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Source image not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Source image unreadable: {0}")]
    SourceUnreadable(PathBuf),

    #[error("Tile size must be positive, found {0}")]
    InvalidTileSize(i64),

    #[error("No outputs specified")]
    NoOutputs,

    #[error("Output '{name}' has a negative rectangle component")]
    NegativeRect { name: String },

    #[error("Output '{name}' has an empty rectangle ({width}x{height})")]
    EmptyRect { name: String, width: i64, height: i64 },

    #[error("Output '{name}' exceeds the {source_width}x{source_height} source bounds")]
    OutOfBounds {
        name: String,
        source_width: u32,
        source_height: u32,
    },
}

/// Errors raised when a file exists but cannot be decoded as an image.
///
/// The asset store recovers from these locally by treating the file as
/// absent, so they never reach the render path.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("Failed to decode '{name}': {source}")]
    Corrupt { name: String, source: image::ImageError },

    #[error("'{0}' decoded to zero frames")]
    Empty(String),
}

/// Errors related to frame sequence construction.
#[derive(thiserror::Error, Debug)]
pub enum SequenceError {
    #[error("Frame sequence cannot be empty")]
    Empty,
}

/// Result type for asset pipeline operations.
pub type AssetResult<T> = Result<T, AssetError>;
