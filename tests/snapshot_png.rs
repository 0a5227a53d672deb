//! PNG snapshot round-trips through the terminal.

#![cfg(feature = "snapshot")]

use rasterm::snapshot::{load_font_png, save_frame_png};
use rasterm::{Cell, HeadlessBackend, Rgb, Terminal, TerminalOptions};

#[test]
fn test_frame_snapshot_matches_dump() {
    let mut term =
        Terminal::open(HeadlessBackend::new(), TerminalOptions::new(16, 8)).unwrap();
    term.grid_mut().fill(Cell::blank(Rgb::new(30, 60, 90)));
    term.grid_mut().print(1, 1, "snap", Rgb::WHITE, Rgb::BLACK);
    term.flush().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    save_frame_png(term.frame(), &path).unwrap();

    let img = image::ImageReader::open(&path)
        .unwrap()
        .decode()
        .unwrap()
        .into_rgb8();
    assert_eq!(img.dimensions(), (16 * 8, 8 * 8));

    let mut dump = vec![0u8; term.screenshot_len()];
    term.dump_screenshot(&mut dump).unwrap();
    assert_eq!(img.into_raw(), dump);
}

#[test]
fn test_font_png_feeds_terminal() {
    // A 16x16 glyph table of 8x8 glyphs, uniform half weight.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("font.png");
    image::GrayImage::from_pixel(128, 128, image::Luma([128u8]))
        .save(&path)
        .unwrap();

    let font = load_font_png(&path).unwrap();
    let mut term = Terminal::open(
        HeadlessBackend::new(),
        TerminalOptions::new(4, 2).font(font),
    )
    .unwrap();
    term.grid_mut()
        .set(0, 0, Cell::new(b'q', Rgb::WHITE, Rgb::BLACK));
    term.flush().unwrap();
    assert_eq!(
        term.backend().last_frame().unwrap().get(0, 0),
        Some(Rgb::new(128, 128, 128))
    );
}

#[test]
fn test_load_font_png_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_font_png(dir.path().join("nope.png"));
    assert!(matches!(err, Err(rasterm::Error::Io(_))));
}
