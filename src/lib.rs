//! Partition a whole-slide image into a grid of fixed-size tiles and render a
//! tissue-coverage summary.
//!
//! The grid covers the image exactly: every band spans the nominal tile size
//! except the last row/column band, which is clamped to the image edge. Each
//! tile is measured by a [TissueMeter], classified against a threshold and
//! drawn on a padded canvas with a color-coded double outline and a
//! `#count` / percentage label.
//!
//! # Basic usage
//! ```no_run
//! # use wsi_tiles::{
//! #     get_tile_indices, open_rgb, Error, LumaTissueMeter, PngFileSink, SummaryRenderer,
//! #     SummaryStyle,
//! # };
//! let img = open_rgb("slide.png")?;
//! let tiles = get_tile_indices(&img, 128, 128)?;
//! let renderer = SummaryRenderer::new(SummaryStyle::default())?;
//! let mut sink = PngFileSink::new("summary.png");
//! renderer.display(&img, &tiles, 128, 128, &LumaTissueMeter::default(), &mut sink)?;
//! # Ok::<(), Error>(())
//! ```

mod display;
mod error;
mod grid;
mod measure;
mod summary;
mod utils;

pub use display::{DisplaySink, PngFileSink, SystemViewer};
pub use error::Error;
pub use grid::{get_num_tiles, get_tile_indices, TileBounds};
pub use measure::{LumaTissueMeter, TissueMeter};
pub use summary::{SummaryRenderer, SummaryStyle, TileClass, TISSUE_THRESHOLD_PERCENT};
pub use utils::open_rgb;
