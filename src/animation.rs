//! Frame sequences and the animation clock.
//!
//! A `FrameSequence` is one animation loop: an ordered, non-empty list of
//! (image, duration) pairs. Frames sourced from numbered files and frames
//! sourced from animated GIFs are represented uniformly, so the clock never
//! cares where a sequence came from.

use std::sync::{Arc, Weak};
use std::time::Duration;

use image::RgbaImage;
use smallvec::SmallVec;

use crate::error::SequenceError;
use crate::resolver::{FallbackResolver, Resolution};
use crate::sprites::AssetRole;

/// A single animation frame. The pixel data is shared, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: Arc<RgbaImage>,
    pub duration: Duration,
}

impl Frame {
    pub fn new(image: Arc<RgbaImage>, duration: Duration) -> Self {
        Self { image, duration }
    }
}

/// Inline storage for the common case of short animation loops.
pub type FrameList = SmallVec<[Frame; 4]>;

/// An ordered, non-empty list of frames forming one animation loop.
///
/// Every frame duration is positive; sources that supply a zero or missing
/// duration have it substituted with the nominal default before the
/// sequence is constructed.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    frames: FrameList,
}

impl FrameSequence {
    pub fn new(frames: FrameList) -> Result<Self, SequenceError> {
        if frames.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The length of one full animation cycle.
    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|frame| frame.duration).sum()
    }

    /// Computes the active frame index for an elapsed time, looping.
    ///
    /// The sequence is treated as a cycle: the elapsed time is reduced
    /// modulo the total cycle length, then the cumulative duration
    /// boundaries are walked to find the containing frame. Deterministic
    /// for any elapsed time; single-frame sequences always yield index 0.
    pub fn frame_index_at(&self, elapsed: Duration) -> usize {
        if self.frames.len() == 1 {
            return 0;
        }

        let cycle = self.total_duration().as_nanos();
        if cycle == 0 {
            return 0;
        }
        let mut offset = elapsed.as_nanos() % cycle;

        for (index, frame) in self.frames.iter().enumerate() {
            let duration = frame.duration.as_nanos();
            if offset < duration {
                return index;
            }
            offset -= duration;
        }

        // Unreachable: the modulo above keeps the offset inside the cycle.
        self.frames.len() - 1
    }

    /// The active frame for an elapsed time.
    pub fn frame_at(&self, elapsed: Duration) -> &Frame {
        &self.frames[self.frame_index_at(elapsed)]
    }
}

/// Per-entity animation bookkeeping: the role being drawn, the elapsed time
/// accumulator, and a back reference to the resolved sequence.
///
/// The sequence itself is owned by the asset store's cache; this only holds
/// a weak handle so resolution stays idempotent and centrally owned.
pub struct AnimationState {
    role: AssetRole,
    elapsed: Duration,
    frames: Weak<FrameSequence>,
}

impl AnimationState {
    pub fn new(role: AssetRole) -> Self {
        Self {
            role,
            elapsed: Duration::ZERO,
            frames: Weak::new(),
        }
    }

    pub fn role(&self) -> AssetRole {
        self.role
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Switches the role being drawn (e.g. when Pac-Man turns). The clock
    /// keeps running; only the sequence handle is dropped.
    pub fn set_role(&mut self, role: AssetRole) {
        if role != self.role {
            self.role = role;
            self.frames = Weak::new();
        }
    }

    /// Advances the clock by a frame tick's delta.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    /// The frame to draw right now, or `None` when the host should fall
    /// back to its built-in vector drawing for this role.
    ///
    /// Re-resolves through the given resolver when the back reference is
    /// dead; after the first call this is a cache hit.
    pub fn current_frame(&mut self, resolver: &FallbackResolver) -> Option<Frame> {
        let sequence = match self.frames.upgrade() {
            Some(sequence) => sequence,
            None => match resolver.resolve(self.role) {
                Resolution::Frames(sequence) => {
                    self.frames = Arc::downgrade(&sequence);
                    sequence
                }
                Resolution::BuiltinDrawing => return None,
            },
        };

        Some(sequence.frame_at(self.elapsed).clone())
    }
}
