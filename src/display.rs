use crate::error::Error;
use image::RgbImage;
use std::path::PathBuf;
use std::process::Command;

/// Receives the finished summary canvas.
///
/// Fire-and-forget: the renderer does not consume any value from the sink.
pub trait DisplaySink {
    fn display(&mut self, canvas: &RgbImage) -> Result<(), Error>;
}

/// Saves the canvas as a PNG file.
pub struct PngFileSink {
    pub path: PathBuf,
}

impl PngFileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> PngFileSink {
        PngFileSink { path: path.into() }
    }
}

impl DisplaySink for PngFileSink {
    fn display(&mut self, canvas: &RgbImage) -> Result<(), Error> {
        canvas.save(&self.path)?;
        Ok(())
    }
}

/// Writes the canvas to a temporary PNG and opens it in the system image
/// viewer.
pub struct SystemViewer;

#[cfg(target_os = "macos")]
const VIEWER_COMMAND: &str = "open";
#[cfg(not(target_os = "macos"))]
const VIEWER_COMMAND: &str = "xdg-open";

impl DisplaySink for SystemViewer {
    fn display(&mut self, canvas: &RgbImage) -> Result<(), Error> {
        let path = std::env::temp_dir().join(format!("tile-summary-{}.png", std::process::id()));
        canvas.save(&path)?;
        Command::new(VIEWER_COMMAND).arg(&path).spawn()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_file_sink() {
        let path = std::env::temp_dir().join("wsi-tiles-sink-test.png");
        let canvas = RgbImage::new(16, 16);
        let mut sink = PngFileSink::new(&path);
        sink.display(&canvas).unwrap();
        let written = image::open(&path).unwrap().into_rgb8();
        assert_eq!(written.dimensions(), (16, 16));
        std::fs::remove_file(&path).unwrap();
    }
}
