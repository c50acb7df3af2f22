//! Image decoding and scaling into framebuffer surfaces

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{imageops::FilterType, RgbaImage};

use crate::rasterizer::Framebuffer;

/// Failure to produce a surface from an image file
#[derive(Debug)]
pub enum AssetError {
    Io { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, source: image::ImageError },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => write!(f, "Failed to read {}: {}", path.display(), source),
            AssetError::Decode { path, source } => write!(f, "Failed to decode {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Decode { source, .. } => Some(source),
        }
    }
}

/// Decode encoded image bytes (PNG, JPEG or BMP) into a surface
pub fn decode_surface(bytes: &[u8]) -> Result<Framebuffer, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    Ok(from_image(rgba))
}

/// Load an image file as an RGBA surface
pub fn load_surface<P: AsRef<Path>>(path: P) -> Result<Framebuffer, AssetError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| AssetError::Io { path: path.to_path_buf(), source })?;
    let surface = decode_surface(&bytes).map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), width = surface.width, height = surface.height, "loaded image");
    Ok(surface)
}

/// Load an image and scale it to `height`, keeping its aspect ratio
pub fn load_and_scale<P: AsRef<Path>>(path: P, height: usize) -> Result<Framebuffer, AssetError> {
    let surface = load_surface(path)?;
    Ok(scale_to_height(&surface, height))
}

/// Scale `surface` to `height`; width follows the aspect ratio, truncated
pub fn scale_to_height(surface: &Framebuffer, height: usize) -> Framebuffer {
    if surface.height == 0 {
        return surface.clone();
    }
    let width = (surface.width as f32 * (height as f32 / surface.height as f32)) as usize;
    scaled(surface, width, height)
}

/// Resample `surface` to exactly `width` x `height`
pub fn scaled(surface: &Framebuffer, width: usize, height: usize) -> Framebuffer {
    let width = width.max(1);
    let height = height.max(1);
    if surface.size() == (width, height) {
        return surface.clone();
    }
    let Some(img) = RgbaImage::from_raw(surface.width as u32, surface.height as u32, surface.pixels.clone()) else {
        return Framebuffer::new(width, height);
    };
    let resized = image::imageops::resize(&img, width as u32, height as u32, FilterType::Lanczos3);
    from_image(resized)
}

fn from_image(img: RgbaImage) -> Framebuffer {
    let (w, h) = img.dimensions();
    Framebuffer {
        pixels: img.into_raw(),
        width: w as usize,
        height: h as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::Color;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, w: u32, h: u32) -> PathBuf {
        let path = dir.path().join(name);
        let img = RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_surface() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "red.png", 4, 2);
        let surface = load_surface(&path).unwrap();
        assert_eq!(surface.size(), (4, 2));
        assert_eq!(surface.get_pixel(3, 1), Color::rgba(200, 10, 10, 255));
    }

    #[test]
    fn test_load_and_scale_keeps_aspect() {
        let dir = TempDir::new().unwrap();
        let path = write_png(&dir, "tall.png", 30, 60);
        let surface = load_and_scale(&path, 150).unwrap();
        assert_eq!(surface.size(), (75, 150));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_surface(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load_surface(&path), Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_scale_to_height_truncates_width() {
        let surface = Framebuffer::filled(10, 3, Color::WHITE);
        assert_eq!(scale_to_height(&surface, 7).size(), (23, 7));
    }
}
