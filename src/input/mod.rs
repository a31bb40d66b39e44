use std::path::Path;

use image::RgbImage;

use crate::error::{Result, SenseError};

pub mod color;

/// Borrowed, read-only view over a decoded RGB8 pixel grid.
#[derive(Debug, Clone, Copy)]
pub struct StripImage<'a> {
    width: u32,
    height: u32,
    rgb: &'a [u8],
}

impl<'a> StripImage<'a> {
    pub fn new(width: u32, height: u32, rgb: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SenseError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(SenseError::InvalidImage(format!(
                "expected {expected} bytes for {width}x{height} RGB, got {}",
                rgb.len()
            )));
        }
        Ok(Self { width, height, rgb })
    }

    pub fn from_rgb(img: &'a RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.rgb[idx], self.rgb[idx + 1], self.rgb[idx + 2]]
    }

    /// Contiguous RGB bytes of row `y` between columns `[x0, x1)`.
    #[inline]
    pub fn row_span(&self, y: u32, x0: u32, x1: u32) -> &'a [u8] {
        let row = y as usize * self.width as usize;
        &self.rgb[(row + x0 as usize) * 3..(row + x1 as usize) * 3]
    }
}

pub fn decode_strip_bytes(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes)?.to_rgb8();
    ensure_non_empty(&img)?;
    Ok(img)
}

pub fn load_strip_image(path: &Path) -> Result<RgbImage> {
    let bytes = std::fs::read(path)?;
    let img = decode_strip_bytes(&bytes)?;
    tracing::info!(
        "loaded strip image {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

fn ensure_non_empty(img: &RgbImage) -> Result<()> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(SenseError::EmptyImage { width, height });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
