//! Lazy, process-lifetime cache of image assets loaded from a flat directory.
//!
//! Every asset is optional: a missing file is a normal condition reported as
//! `None`, and a corrupt file is downgraded to the same so the caller can
//! fall back to its built-in drawing. Loaded results are cached for the
//! lifetime of the store and never invalidated.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, ImageFormat, RgbaImage};
use parking_lot::Mutex;
use smallvec::smallvec;
use tracing::{debug, warn};

use crate::animation::{Frame, FrameList, FrameSequence};
use crate::constants::{FRAME_DURATION, GHOST_FRAME_DURATION, TILE_SIZE};
use crate::error::DecodeError;

/// Externally supplied knobs for the asset pipeline.
#[derive(Debug, Clone, Copy)]
pub struct AssetConfig {
    /// The size of each board tile, in pixels. Loaded frames are scaled to
    /// this size. Must be positive.
    pub tile_size: u32,
    /// Display time for frames loaded from numbered image files, and the
    /// substitute for zero-length GIF delays.
    pub frame_duration: Duration,
    /// Display time for the shared ghost frames.
    pub ghost_frame_duration: Duration,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            frame_duration: FRAME_DURATION,
            ghost_frame_duration: GHOST_FRAME_DURATION,
        }
    }
}

/// Cache over a flat directory of optionally-present image files.
///
/// Static images become single-frame sequences at the nominal frame
/// duration; animated GIFs keep their embedded per-frame delays. All frames
/// are scaled to the configured tile size at load time.
pub struct AssetStore {
    dir: PathBuf,
    config: AssetConfig,
    /// Name -> loaded sequence, or `None` when the file is missing or
    /// corrupt. Reads happen under this lock; lazy load-then-cache is
    /// otherwise a read-check-then-write race.
    cache: Mutex<HashMap<String, Option<Arc<FrameSequence>>>>,
}

impl AssetStore {
    pub fn new(dir: impl Into<PathBuf>, config: AssetConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> AssetConfig {
        self.config
    }

    /// Loads the named file, or returns the cached result of a previous
    /// attempt. `None` means missing or undecodable; both outcomes are
    /// cached, so repeated lookups for an absent asset never re-hit the
    /// filesystem.
    pub fn load(&self, name: &str) -> Option<Arc<FrameSequence>> {
        let mut cache = self.cache.lock();
        if let Some(entry) = cache.get(name) {
            return entry.clone();
        }

        let entry = self.read(name);
        cache.insert(name.to_string(), entry.clone());
        entry
    }

    fn read(&self, name: &str) -> Option<Arc<FrameSequence>> {
        let path = self.dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => {
                debug!(name, "Asset not present");
                return None;
            }
        };

        match self.decode(name, &bytes) {
            Ok(sequence) => {
                debug!(name, frames = sequence.len(), "Loaded asset");
                Some(Arc::new(sequence))
            }
            Err(err) => {
                warn!(name, %err, "Treating undecodable asset as absent");
                None
            }
        }
    }

    fn decode(&self, name: &str, bytes: &[u8]) -> Result<FrameSequence, DecodeError> {
        let frames = if matches!(image::guess_format(bytes), Ok(ImageFormat::Gif)) {
            self.decode_animated(name, bytes)?
        } else {
            self.decode_static(name, bytes)?
        };
        FrameSequence::new(frames).map_err(|_| DecodeError::Empty(name.to_string()))
    }

    fn decode_static(&self, name: &str, bytes: &[u8]) -> Result<FrameList, DecodeError> {
        let img = image::load_from_memory(bytes).map_err(|source| DecodeError::Corrupt {
            name: name.to_string(),
            source,
        })?;
        let image = self.scale_to_tile(img.to_rgba8());
        Ok(smallvec![Frame::new(Arc::new(image), self.config.frame_duration)])
    }

    fn decode_animated(&self, name: &str, bytes: &[u8]) -> Result<FrameList, DecodeError> {
        let corrupt = |source| DecodeError::Corrupt {
            name: name.to_string(),
            source,
        };

        let decoder = GifDecoder::new(Cursor::new(bytes)).map_err(corrupt)?;
        let frames = decoder.into_frames().collect_frames().map_err(corrupt)?;
        if frames.is_empty() {
            return Err(DecodeError::Empty(name.to_string()));
        }

        Ok(frames
            .into_iter()
            .map(|frame| {
                let delay = Duration::from(frame.delay());
                // A zero GIF delay is substituted with the nominal default.
                let duration = if delay.is_zero() { self.config.frame_duration } else { delay };
                let image = self.scale_to_tile(frame.into_buffer());
                Frame::new(Arc::new(image), duration)
            })
            .collect())
    }

    fn scale_to_tile(&self, image: RgbaImage) -> RgbaImage {
        let size = self.config.tile_size;
        if image.dimensions() == (size, size) {
            return image;
        }
        imageops::resize(&image, size, size, FilterType::Lanczos3)
    }
}
