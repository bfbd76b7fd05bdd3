use crate::grid::TileBounds;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Tile sizes must be positive, got {row_tile_size}x{col_tile_size}")]
    InvalidTileSize {
        row_tile_size: u32,
        col_tile_size: u32,
    },
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    /// A tile from the grid does not fit the source image
    #[error("Tile {tile} does not fit image bounds {height}x{width}")]
    TileOutOfBounds {
        tile: TileBounds,
        width: u32,
        height: u32,
    },
    /// The source image does not fit the canvas computed from the nominal tile sizes
    #[error("Image {width}x{height} exceeds summary canvas {canvas_width}x{canvas_height}")]
    CanvasOverflow {
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
    /// Error reading font file
    #[error("Font {path} could not be read")]
    FontRead { path: String, source: io::Error },
    #[error("Font {path} is not a usable TrueType font")]
    FontParse { path: String },
    /// Error decoding or copying image data
    #[error("Image operation failed")]
    Image(#[from] image::error::ImageError),
    /// Failure propagated from a tissue meter or display sink
    #[error("Collaborator failed")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Io(#[from] io::Error),
}
