use anyhow::Result;
use image::{Rgb, RgbImage};
use wsi_tiles::{get_tile_indices, Error, PngFileSink, SummaryRenderer, SummaryStyle, TileBounds};

const FONT: &[u8] = include_bytes!("DejaVuSans.ttf");

const GRAY: Rgb<u8> = Rgb([120, 120, 120]);
const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

fn renderer() -> Result<SummaryRenderer> {
    let renderer = SummaryRenderer::from_font_data(SummaryStyle::default(), FONT.to_vec())?;
    Ok(renderer)
}

fn percent_75(_: &RgbImage) -> std::result::Result<f64, Error> {
    Ok(75.0)
}

fn percent_50(_: &RgbImage) -> std::result::Result<f64, Error> {
    Ok(50.0)
}

/// Reads the percentage back from the red channel of the tile's first pixel
fn red_channel_percent(tile: &RgbImage) -> std::result::Result<f64, Error> {
    Ok(tile.get_pixel(0, 0).0[0] as f64)
}

fn failing_meter(_: &RgbImage) -> std::result::Result<f64, Error> {
    Err(Error::Collaborator("stain classifier offline".into()))
}

#[test]
fn test_summary_canvas() -> Result<()> {
    // 300 rows x 200 cols, 128x128 tiles: 3 x 2 grid, 384 x 256 canvas
    let img = RgbImage::from_pixel(200, 300, Rgb([10, 20, 30]));
    let tiles = get_tile_indices(&img, 128, 128)?;
    assert_eq!(tiles.len(), 6);

    let canvas = renderer()?.render(&img, &tiles, 128, 128, &percent_75)?;
    assert_eq!(canvas.dimensions(), (256, 384));

    // double outline in the above-threshold color at the first tile corner
    assert_eq!(*canvas.get_pixel(0, 0), GREEN);
    assert_eq!(*canvas.get_pixel(1, 1), GREEN);
    // source pixels survive in the tile interior
    assert_eq!(*canvas.get_pixel(100, 100), Rgb([10, 20, 30]));
    // padding beyond the source stays gray
    assert_eq!(*canvas.get_pixel(210, 10), GRAY);
    assert_eq!(*canvas.get_pixel(10, 310), GRAY);
    Ok(())
}

#[test]
fn test_outline_colors_per_class() -> Result<()> {
    // one row of three 20x20 tiles encoding 80%, 30% and 0% in the red channel
    let mut img = RgbImage::new(60, 20);
    for (x0, percent) in &[(0u32, 80u8), (20, 30), (40, 0)] {
        for y in 0..20 {
            for x in *x0..*x0 + 20 {
                img.put_pixel(x, y, Rgb([*percent, 0, 0]));
            }
        }
    }
    let tiles = get_tile_indices(&img, 20, 20)?;
    assert_eq!(tiles.len(), 3);

    let canvas = renderer()?.render(&img, &tiles, 20, 20, &red_channel_percent)?;
    assert_eq!(*canvas.get_pixel(0, 0), GREEN);
    assert_eq!(*canvas.get_pixel(20, 0), YELLOW);
    assert_eq!(*canvas.get_pixel(40, 0), RED);
    Ok(())
}

#[test]
fn test_meter_failure_aborts_render() -> Result<()> {
    let img = RgbImage::new(64, 64);
    let tiles = get_tile_indices(&img, 32, 32)?;
    let res = renderer()?.render(&img, &tiles, 32, 32, &failing_meter);
    assert!(matches!(res, Err(Error::Collaborator(_))));
    Ok(())
}

#[test]
fn test_render_rejects_zero_tile_size() -> Result<()> {
    let img = RgbImage::new(64, 64);
    let res = renderer()?.render(&img, &[], 0, 32, &percent_75);
    assert!(matches!(res, Err(Error::InvalidTileSize { .. })));
    Ok(())
}

#[test]
fn test_render_rejects_foreign_grid() -> Result<()> {
    // a grid computed for a bigger image does not fit this one
    let img = RgbImage::new(50, 50);
    let tiles = vec![TileBounds {
        start_row: 0,
        end_row: 128,
        start_col: 0,
        end_col: 128,
    }];
    let res = renderer()?.render(&img, &tiles, 128, 128, &percent_75);
    assert!(matches!(res, Err(Error::TileOutOfBounds { .. })));
    Ok(())
}

#[test]
fn test_missing_font_fails() {
    let style = SummaryStyle {
        font_path: "/no/such/font.ttf".into(),
        ..SummaryStyle::default()
    };
    assert!(matches!(
        SummaryRenderer::new(style),
        Err(Error::FontRead { .. })
    ));
}

#[test]
fn test_bad_font_data_fails() {
    let res = SummaryRenderer::from_font_data(SummaryStyle::default(), vec![0, 1, 2, 3]);
    assert!(matches!(res, Err(Error::FontParse { .. })));
}

#[test]
fn test_display_writes_png() -> Result<()> {
    let img = RgbImage::from_pixel(100, 100, Rgb([200, 180, 190]));
    let tiles = get_tile_indices(&img, 64, 64)?;
    let path = std::env::temp_dir().join("wsi-tiles-display-test.png");
    let mut sink = PngFileSink::new(&path);
    renderer()?.display(&img, &tiles, 64, 64, &percent_50, &mut sink)?;

    // canvas is padded to whole tiles: 2 x 2 tiles of 64
    let written = image::open(&path)?.into_rgb8();
    assert_eq!(written.dimensions(), (128, 128));
    // exactly at the threshold counts as covered
    assert_eq!(*written.get_pixel(0, 0), GREEN);
    std::fs::remove_file(&path)?;
    Ok(())
}
