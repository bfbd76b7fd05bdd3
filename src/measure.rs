use crate::error::Error;
use image::RgbImage;

/// Measures the tissue coverage of a tile.
///
/// What counts as tissue is entirely up to the implementation; the renderer
/// only requires a percentage in `0.0..=100.0`.
pub trait TissueMeter {
    fn tissue_percent(&self, tile: &RgbImage) -> Result<f64, Error>;
}

impl<F> TissueMeter for F
where
    F: Fn(&RgbImage) -> Result<f64, Error>,
{
    fn tissue_percent(&self, tile: &RgbImage) -> Result<f64, Error> {
        self(tile)
    }
}

/// Counts pixels darker than a luma cutoff.
///
/// On a brightfield slide the background is near-white glass, so any pixel
/// whose BT.601 luma falls below the cutoff is taken as tissue.
#[derive(Debug, Clone, Copy)]
pub struct LumaTissueMeter {
    pub cutoff: u8,
}

impl Default for LumaTissueMeter {
    fn default() -> Self {
        LumaTissueMeter { cutoff: 230 }
    }
}

impl TissueMeter for LumaTissueMeter {
    fn tissue_percent(&self, tile: &RgbImage) -> Result<f64, Error> {
        let total = tile.width() as u64 * tile.height() as u64;
        if total == 0 {
            return Ok(0.0);
        }
        let tissue = tile
            .pixels()
            .filter(|p| {
                let [r, g, b] = p.0;
                let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                luma < self.cutoff as f64
            })
            .count();
        Ok(100.0 * tissue as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_luma_meter() {
        // left half dark, right half white
        let mut tile = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        for y in 0..10 {
            for x in 0..5 {
                tile.put_pixel(x, y, Rgb([40, 30, 60]));
            }
        }
        let meter = LumaTissueMeter::default();
        let percent = meter.tissue_percent(&tile).unwrap();
        assert!((percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_luma_meter_blank_tile() {
        let tile = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let percent = LumaTissueMeter::default().tissue_percent(&tile).unwrap();
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn test_closure_meter() {
        let tile = RgbImage::new(4, 4);
        let meter = |_: &RgbImage| Ok(42.0);
        assert_eq!(meter.tissue_percent(&tile).unwrap(), 42.0);
    }
}
