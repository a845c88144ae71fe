#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// A uniquely-named scratch directory, removed on drop.
pub struct TempAssetDir {
    path: PathBuf,
}

impl TempAssetDir {
    pub fn new(label: &str) -> Self {
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("pacman-assets-{label}-{}-{id}", std::process::id()));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempAssetDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Writes a solid-color PNG of the given size.
pub fn write_png(dir: &TempAssetDir, name: &str, width: u32, height: u32, color: [u8; 4]) {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    image.save(dir.join(name)).unwrap();
}

/// Writes an arbitrary image under the given name.
pub fn save_image(dir: &TempAssetDir, name: &str, image: &RgbaImage) {
    image.save(dir.join(name)).unwrap();
}

/// Writes an animated GIF with one solid-color frame per delay, in
/// milliseconds. Zero delays are written verbatim.
pub fn write_gif(dir: &TempAssetDir, name: &str, delays_ms: &[u32]) {
    let file = fs::File::create(dir.join(name)).unwrap();
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).unwrap();
    for (index, delay) in delays_ms.iter().enumerate() {
        let shade = (index as u8 + 1) * 40;
        let buffer = RgbaImage::from_pixel(8, 8, Rgba([shade, 0, 0, 255]));
        let frame = Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(*delay, 1));
        encoder.encode_frame(frame).unwrap();
    }
}

/// Writes bytes that are not a decodable image.
pub fn write_garbage(dir: &TempAssetDir, name: &str) {
    fs::write(dir.join(name), b"not an image at all").unwrap();
}

/// Writes a manifest file and returns its path.
pub fn write_manifest(dir: &TempAssetDir, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}
