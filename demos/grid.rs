use anyhow::{Context, Result};
use wsi_tiles::{get_num_tiles, get_tile_indices, open_rgb};

fn run() -> Result<()> {
    let path = std::env::args().nth(1).expect("Usage: grid IMAGE");
    let img = open_rgb(&path).with_context(|| format!("Failed to open {}", path))?;
    eprintln!("read image from {}", path);

    let (num_row_tiles, num_col_tiles) = get_num_tiles(&img, 128, 128)?;
    eprintln!("{} x {} tiles", num_row_tiles, num_col_tiles);
    for (i, tile) in get_tile_indices(&img, 128, 128)?.iter().enumerate() {
        eprintln!(
            "  Tile {}: {} {}x{}",
            i + 1,
            tile,
            tile.height(),
            tile.width()
        );
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
