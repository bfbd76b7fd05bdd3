use crate::error::Error;
use image::RgbImage;
use std::fmt;

/// Pixel bounds of one tile, as half-open row and column ranges.
///
/// All tiles of a grid span exactly the nominal tile size, except the last
/// row/column band which ends at the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl TileBounds {
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }

    pub fn width(&self) -> u32 {
        self.end_col - self.start_col
    }
}

impl fmt::Display for TileBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}:{}, {}:{}]",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}

fn check_args(img: &RgbImage, row_tile_size: u32, col_tile_size: u32) -> Result<(), Error> {
    if row_tile_size == 0 || col_tile_size == 0 {
        return Err(Error::InvalidTileSize {
            row_tile_size,
            col_tile_size,
        });
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::EmptyImage {
            width: img.width(),
            height: img.height(),
        });
    }
    Ok(())
}

/// Number of vertical and horizontal tiles that `img` can be divided into.
///
/// Returns `(num_row_tiles, num_col_tiles)`, rounding up so that partial
/// bands at the bottom/right edge count as a tile.
/// # Errors
/// If either tile size is zero, or the image has no pixels.
pub fn get_num_tiles(
    img: &RgbImage,
    row_tile_size: u32,
    col_tile_size: u32,
) -> Result<(u32, u32), Error> {
    check_args(img, row_tile_size, col_tile_size)?;
    let (rows, cols) = (img.height(), img.width());
    let num_row_tiles = (rows + row_tile_size - 1) / row_tile_size;
    let num_col_tiles = (cols + col_tile_size - 1) / col_tile_size;
    Ok((num_row_tiles, num_col_tiles))
}

/// Tile bounds for `img`, in row-major order.
///
/// Every band starts at a multiple of the tile size. The last row and column
/// band is clamped to the image edge, so the grid covers the image exactly
/// with no tile reaching past it.
/// # Errors
/// If either tile size is zero, or the image has no pixels.
/// # Example
/// ```
/// # use wsi_tiles::{get_tile_indices, Error};
/// let img = image::RgbImage::new(200, 300);
/// let tiles = get_tile_indices(&img, 128, 128)?;
/// assert_eq!(tiles.len(), 6);
/// # Ok::<(), Error>(())
/// ```
pub fn get_tile_indices(
    img: &RgbImage,
    row_tile_size: u32,
    col_tile_size: u32,
) -> Result<Vec<TileBounds>, Error> {
    let (num_row_tiles, num_col_tiles) = get_num_tiles(img, row_tile_size, col_tile_size)?;
    let (rows, cols) = (img.height(), img.width());
    let mut tiles = Vec::with_capacity((num_row_tiles * num_col_tiles) as usize);
    for r in 0..num_row_tiles {
        let start_row = r * row_tile_size;
        let end_row = if r + 1 < num_row_tiles {
            (r + 1) * row_tile_size
        } else {
            rows
        };
        for c in 0..num_col_tiles {
            let start_col = c * col_tile_size;
            let end_col = if c + 1 < num_col_tiles {
                (c + 1) * col_tile_size
            } else {
                cols
            };
            tiles.push(TileBounds {
                start_row,
                end_row,
                start_col,
                end_col,
            });
        }
    }
    Ok(tiles)
}
