// Screenshot capture
//
// Encodes the current RGBA frame buffer as a PNG under `screenshots/`,
// named after the ROM and a timestamp.

use crate::ppu::{SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
use chrono::Local;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory screenshots are written into
const SCREENSHOT_DIR: &str = "screenshots";

/// Error type for screenshot failures
#[derive(Debug)]
pub enum ScreenshotError {
    /// Directory creation or file I/O failed
    Io(io::Error),
    /// PNG encoding failed
    Encoding(png::EncodingError),
}

impl fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenshotError::Io(err) => write!(f, "screenshot I/O error: {}", err),
            ScreenshotError::Encoding(err) => write!(f, "PNG encoding error: {}", err),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(err: io::Error) -> Self {
        ScreenshotError::Io(err)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(err: png::EncodingError) -> Self {
        ScreenshotError::Encoding(err)
    }
}

/// Save a frame as a timestamped PNG and return its path
///
/// # Errors
/// Fails when the screenshot directory cannot be created or the PNG
/// cannot be encoded.
pub fn save_screenshot(frame: &[u32], rom_path: Option<&Path>) -> Result<PathBuf, ScreenshotError> {
    assert_eq!(frame.len(), SCREEN_SIZE, "frame buffer has the wrong size");

    fs::create_dir_all(SCREENSHOT_DIR)?;

    let stem = rom_path
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or("frame");
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = PathBuf::from(SCREENSHOT_DIR).join(format!("{}-{}.png", stem, timestamp));

    let file = fs::File::create(&path)?;
    let mut encoder = png::Encoder::new(
        io::BufWriter::new(file),
        SCREEN_WIDTH as u32,
        SCREEN_HEIGHT as u32,
    );
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&rgba_bytes(frame))?;

    Ok(path)
}

/// Flatten packed 0xRRGGBBAA pixels into the byte order PNG expects
fn rgba_bytes(frame: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(frame.len() * 4);
    for &pixel in frame {
        bytes.extend_from_slice(&pixel.to_be_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_byte_order() {
        let bytes = rgba_bytes(&[0x11223344, 0xAABBCCDD]);
        assert_eq!(
            bytes,
            vec![0x11, 0x22, 0x33, 0x44, 0xAA, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn test_rgba_length() {
        let frame = vec![0u32; SCREEN_SIZE];
        assert_eq!(rgba_bytes(&frame).len(), SCREEN_SIZE * 4);
    }
}
