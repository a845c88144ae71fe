//! Ordered fallback resolution from drawable roles to frame sequences.
//!
//! Each role has an ordered list of candidate asset names; the first one
//! present in the store wins. A role with no candidates present resolves to
//! `Resolution::BuiltinDrawing`, telling the host to use its own vector
//! drawing. Resolution never fails and never blocks the caller on bad data.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::animation::{Frame, FrameList, FrameSequence};
use crate::constants::TELEPORT_FRAME_COUNT;
use crate::sprites::{AssetRole, TileKind};
use crate::store::AssetStore;

/// The outcome of resolving a role.
///
/// Callers must handle both cases: a concrete frame sequence to draw, or
/// the signal to invoke the guaranteed-available built-in drawing.
#[derive(Debug, Clone)]
pub enum Resolution {
    Frames(Arc<FrameSequence>),
    BuiltinDrawing,
}

impl Resolution {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Resolution::BuiltinDrawing)
    }

    pub fn frames(&self) -> Option<&Arc<FrameSequence>> {
        match self {
            Resolution::Frames(sequence) => Some(sequence),
            Resolution::BuiltinDrawing => None,
        }
    }
}

/// Resolves roles against an injected [`AssetStore`].
///
/// Results are cached per role for the process lifetime. An asset file
/// created after a role first resolved is not picked up; the cache is
/// immutable for the run, matching the store beneath it.
pub struct FallbackResolver {
    store: AssetStore,
    cache: Mutex<HashMap<AssetRole, Resolution>>,
}

impl FallbackResolver {
    pub fn new(store: AssetStore) -> Self {
        Self {
            store,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    /// Resolves a role to its frame sequence, or to the built-in drawing
    /// signal. Cheap and side-effect-free after the first call per role.
    pub fn resolve(&self, role: AssetRole) -> Resolution {
        if let Some(hit) = self.cache.lock().get(&role) {
            return hit.clone();
        }

        let resolution = self.resolve_uncached(role);
        if resolution.is_builtin() {
            debug!(?role, "No assets present, using builtin drawing");
        }
        self.cache.lock().insert(role, resolution.clone());
        resolution
    }

    /// Resolves every role once, so the first frame of the game loop does
    /// not pay the asset directory's load cost.
    pub fn preload(&self) {
        for role in AssetRole::all() {
            self.resolve(role);
        }
    }

    fn resolve_uncached(&self, role: AssetRole) -> Resolution {
        let config = self.store.config();
        match role {
            AssetRole::Tile(TileKind::Teleport) => self.resolve_teleport(),
            AssetRole::Tile(kind) => {
                match self.store.load(&format!("{}.png", kind.as_ref())) {
                    Some(sequence) => Resolution::Frames(sequence),
                    None => Resolution::BuiltinDrawing,
                }
            }
            AssetRole::Pacman(_) => {
                // Directions are independent: a missing direction falls back
                // on its own without affecting the others.
                match self.collect_numbered(&role.base_name(), config.frame_duration) {
                    Some(sequence) => Resolution::Frames(sequence),
                    None => Resolution::BuiltinDrawing,
                }
            }
            AssetRole::Ghost => match self.collect_numbered("ghost", config.ghost_frame_duration) {
                Some(sequence) => Resolution::Frames(sequence),
                None => Resolution::BuiltinDrawing,
            },
        }
    }

    /// Teleport resolution order: animated GIF, then numbered frames, then
    /// the static tile image.
    fn resolve_teleport(&self) -> Resolution {
        if let Some(sequence) = self.store.load("teleport.gif") {
            return Resolution::Frames(sequence);
        }

        let duration = self.store.config().frame_duration;
        if let Some(sequence) = self.collect_numbered("teleport", duration) {
            if sequence.len() < TELEPORT_FRAME_COUNT {
                debug!(
                    frames = sequence.len(),
                    "Teleport animation shorter than the canonical frame count"
                );
            }
            return Resolution::Frames(sequence);
        }

        match self.store.load("teleport.png") {
            Some(sequence) => Resolution::Frames(sequence),
            None => Resolution::BuiltinDrawing,
        }
    }

    /// Collects numbered frames `{base}_0.png`, `{base}_1.png`, ... while
    /// consecutively present, stopping at the first missing index. At least
    /// one frame is required.
    fn collect_numbered(&self, base: &str, duration: Duration) -> Option<Arc<FrameSequence>> {
        let mut frames = FrameList::new();
        for index in 0usize.. {
            let Some(sequence) = self.store.load(&format!("{base}_{index}.png")) else {
                break;
            };
            // Numbered files contribute their first frame at the caller's cadence.
            let image = sequence.frames()[0].image.clone();
            frames.push(Frame::new(image, duration));
        }

        if frames.is_empty() {
            return None;
        }
        FrameSequence::new(frames).ok().map(Arc::new)
    }
}
