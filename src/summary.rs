use crate::display::DisplaySink;
use crate::error::Error;
use crate::grid::{get_num_tiles, TileBounds};
use crate::measure::TissueMeter;
use image::{GenericImage, GenericImageView, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use log::info;
use rusttype::{Font, Scale};
use std::fs;
use std::path::PathBuf;

/// Tissue percentage at or above which a tile counts as covered.
pub const TISSUE_THRESHOLD_PERCENT: f64 = 50.0;

// gray edges so that summary text does not get cut off at the image border
const PADDING_COLOR: Rgb<u8> = Rgb([120, 120, 120]);

/// Coverage bucket of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileClass {
    AboveThreshold,
    BelowThreshold,
    NoTissue,
}

impl TileClass {
    /// Classify a tissue percentage against `threshold`.
    ///
    /// The buckets partition `0.0..=100.0`: a percentage equal to the
    /// threshold is `AboveThreshold`, zero is `NoTissue`.
    pub fn classify(percent: f64, threshold: f64) -> TileClass {
        if percent >= threshold {
            TileClass::AboveThreshold
        } else if percent > 0.0 {
            TileClass::BelowThreshold
        } else {
            TileClass::NoTissue
        }
    }

    fn outline_color(self, style: &SummaryStyle) -> Rgb<u8> {
        match self {
            TileClass::AboveThreshold => style.thresh_color,
            TileClass::BelowThreshold => style.below_thresh_color,
            TileClass::NoTissue => style.no_tissue_color,
        }
    }
}

/// Colors, label text size and font used for the summary overlay.
#[derive(Debug, Clone)]
pub struct SummaryStyle {
    /// Outline for tiles at or above the tissue threshold
    pub thresh_color: Rgb<u8>,
    /// Outline for tiles with some tissue below the threshold
    pub below_thresh_color: Rgb<u8>,
    /// Outline for tiles without any tissue
    pub no_tissue_color: Rgb<u8>,
    pub text_color: Rgb<u8>,
    pub text_size: f32,
    pub font_path: PathBuf,
    pub tissue_threshold: f64,
}

impl Default for SummaryStyle {
    fn default() -> Self {
        SummaryStyle {
            thresh_color: Rgb([0, 255, 0]),
            below_thresh_color: Rgb([255, 255, 0]),
            no_tissue_color: Rgb([255, 0, 0]),
            text_color: Rgb([255, 255, 255]),
            text_size: 22.0,
            font_path: PathBuf::from("/Library/Fonts/Arial Bold.ttf"),
            tissue_threshold: TISSUE_THRESHOLD_PERCENT,
        }
    }
}

/// Renders a tissue-coverage summary over a tiled image.
pub struct SummaryRenderer {
    style: SummaryStyle,
    font: Font<'static>,
}

impl SummaryRenderer {
    /// Create a renderer, loading the label font from `style.font_path`.
    ///
    /// # Errors
    /// If the font file can not be read or parsed. There is no fallback font.
    pub fn new(style: SummaryStyle) -> Result<SummaryRenderer, Error> {
        let path = style.font_path.display().to_string();
        let data = fs::read(&style.font_path).map_err(|source| Error::FontRead {
            path: path.clone(),
            source,
        })?;
        SummaryRenderer::from_font_data(style, data)
    }

    /// Create a renderer from font bytes, e.g. a font embedded with
    /// `include_bytes!`.
    pub fn from_font_data(style: SummaryStyle, data: Vec<u8>) -> Result<SummaryRenderer, Error> {
        let font = Font::try_from_vec(data).ok_or_else(|| Error::FontParse {
            path: style.font_path.display().to_string(),
        })?;
        Ok(SummaryRenderer { style, font })
    }

    pub fn style(&self) -> &SummaryStyle {
        &self.style
    }

    /// Render the annotated summary canvas for `img`.
    ///
    /// The canvas is sized from the nominal tile sizes, padded with gray
    /// beyond the image so edge labels are not clipped. Each tile of `tiles`
    /// is measured with `meter`, classified, outlined with a double rectangle
    /// in its bucket color and labeled with its sequence number and
    /// percentage. One diagnostic line per tile is logged.
    ///
    /// # Errors
    /// * A tile size is zero or the image is empty
    /// * The image or a tile does not fit the canvas computed from the
    ///   nominal tile sizes
    /// * The tissue meter fails
    pub fn render<M: TissueMeter>(
        &self,
        img: &RgbImage,
        tiles: &[TileBounds],
        row_tile_size: u32,
        col_tile_size: u32,
        meter: &M,
    ) -> Result<RgbImage, Error> {
        let (num_row_tiles, num_col_tiles) = get_num_tiles(img, row_tile_size, col_tile_size)?;
        let canvas_width = col_tile_size * num_col_tiles;
        let canvas_height = row_tile_size * num_row_tiles;
        if img.width() > canvas_width || img.height() > canvas_height {
            return Err(Error::CanvasOverflow {
                width: img.width(),
                height: img.height(),
                canvas_width,
                canvas_height,
            });
        }
        let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, PADDING_COLOR);
        canvas.copy_from(img, 0, 0)?;

        let scale = Scale::uniform(self.style.text_size);
        let v_metrics = self.font.v_metrics(scale);
        let line_height = (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap).ceil() as u32;

        for (i, &tile) in tiles.iter().enumerate() {
            let count = i + 1;
            if tile.start_row >= tile.end_row
                || tile.start_col >= tile.end_col
                || tile.end_row > img.height()
                || tile.end_col > img.width()
            {
                return Err(Error::TileOutOfBounds {
                    tile,
                    width: img.width(),
                    height: img.height(),
                });
            }
            let sub = img
                .view(tile.start_col, tile.start_row, tile.width(), tile.height())
                .to_image();
            let percent = meter.tissue_percent(&sub)?;
            info!("TILE {}: Tissue {:.6}%", tile, percent);

            let class = TileClass::classify(percent, self.style.tissue_threshold);
            let color = class.outline_color(&self.style);
            let outer = Rect::at(tile.start_col as i32, tile.start_row as i32)
                .of_size(tile.width(), tile.height());
            draw_hollow_rect_mut(&mut canvas, outer, color);
            // a band of 1 or 2 pixels has no room for the inset rectangle
            if tile.width() > 2 && tile.height() > 2 {
                let inner = Rect::at(tile.start_col as i32 + 1, tile.start_row as i32 + 1)
                    .of_size(tile.width() - 2, tile.height() - 2);
                draw_hollow_rect_mut(&mut canvas, inner, color);
            }

            let (label_x, label_y) = (tile.start_col + 2, tile.start_row + 2);
            draw_text_mut(
                &mut canvas,
                self.style.text_color,
                label_x,
                label_y,
                scale,
                &self.font,
                &format!("#{}", count),
            );
            draw_text_mut(
                &mut canvas,
                self.style.text_color,
                label_x,
                label_y + line_height,
                scale,
                &self.font,
                &format!("{:.2}%", percent),
            );
        }
        Ok(canvas)
    }

    /// Render the summary canvas and hand it to `sink`.
    pub fn display<M: TissueMeter, S: DisplaySink>(
        &self,
        img: &RgbImage,
        tiles: &[TileBounds],
        row_tile_size: u32,
        col_tile_size: u32,
        meter: &M,
        sink: &mut S,
    ) -> Result<(), Error> {
        let canvas = self.render(img, tiles, row_tile_size, col_tile_size, meter)?;
        sink.display(&canvas)
    }
}
