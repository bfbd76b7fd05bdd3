use anyhow::{Context, Result};
use wsi_tiles::{
    get_tile_indices, open_rgb, LumaTissueMeter, PngFileSink, SummaryRenderer, SummaryStyle,
};

const ROW_TILE_SIZE: u32 = 128;
const COL_TILE_SIZE: u32 = 128;

fn run() -> Result<()> {
    env_logger::init();
    let path = std::env::args().nth(1).expect("Usage: summary IMAGE [FONT]");
    let img = open_rgb(&path).with_context(|| format!("Failed to open {}", path))?;
    eprintln!("read image from {}", path);

    let mut style = SummaryStyle::default();
    if let Some(font_path) = std::env::args().nth(2) {
        style.font_path = font_path.into();
    }
    let renderer = SummaryRenderer::new(style)?;
    let tiles = get_tile_indices(&img, ROW_TILE_SIZE, COL_TILE_SIZE)?;

    let mut sink = PngFileSink::new("summary.png");
    renderer.display(
        &img,
        &tiles,
        ROW_TILE_SIZE,
        COL_TILE_SIZE,
        &LumaTissueMeter::default(),
        &mut sink,
    )?;
    eprintln!("wrote summary.png");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:?}", err);
    }
}
