use crate::error::Error;
use image::RgbImage;
use std::path::Path;

/// Open an image file and convert it to RGB.
/// # Errors
/// If the file can not be opened or decoded.
pub fn open_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage, Error> {
    Ok(image::open(path)?.into_rgb8())
}
