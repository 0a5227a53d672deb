//! Full lifecycle tests over the headless backend.

use rasterm::{
    Backend, Cell, Error, FontBitmap, HeadlessBackend, Rgb, Terminal, TerminalOptions,
};

fn open_80x25() -> Terminal<HeadlessBackend> {
    Terminal::open(HeadlessBackend::new(), TerminalOptions::new(80, 25)).unwrap()
}

#[test]
fn test_open_defaults() {
    let term = open_80x25();
    assert_eq!(term.columns(), 80);
    assert_eq!(term.rows(), 25);
    assert_eq!(term.glyph_width(), 8);
    assert_eq!(term.glyph_height(), 8);
    assert_eq!(term.frame().width(), 640);
    assert_eq!(term.frame().height(), 200);
}

#[test]
fn test_open_with_glyph_size() {
    let term = Terminal::open(
        HeadlessBackend::new(),
        TerminalOptions::new(40, 12).glyph_size(16, 24),
    )
    .unwrap();
    assert_eq!(term.glyph_width(), 16);
    assert_eq!(term.glyph_height(), 24);
    assert_eq!(term.frame().width(), 40 * 16);
    assert_eq!(term.frame().height(), 12 * 24);
}

#[test]
fn test_open_rejects_zero_grid() {
    for (c, r) in [(0, 25), (80, 0), (0, 0)] {
        let err = Terminal::open(HeadlessBackend::new(), TerminalOptions::new(c, r));
        assert!(matches!(err, Err(Error::InvalidDimensions { .. })));
    }
}

#[test]
fn test_open_on_busy_backend_fails() {
    let mut backend = HeadlessBackend::new();
    backend.open_surface(64, 64, "held").unwrap();
    let err = Terminal::open(backend, TerminalOptions::new(10, 10));
    assert!(matches!(err, Err(Error::AlreadyOpen)));
}

#[test]
fn test_resize_then_flush() {
    let mut term = open_80x25();
    term.resize(8, 16, 100, 30).unwrap();
    assert_eq!(term.columns(), 100);
    assert_eq!(term.rows(), 30);
    assert_eq!(term.glyph_height(), 16);

    term.flush().unwrap();
    let frame = term.backend().last_frame().unwrap();
    assert_eq!(frame.width(), 800);
    assert_eq!(frame.height(), 480);
}

#[test]
fn test_custom_font_at_open() {
    // 16x16 table of 4x6 glyphs, all half-bright.
    let font = FontBitmap::from_table(vec![128u8; 64 * 96], 64, 96);
    assert_eq!(font.glyph_width, 4);
    assert_eq!(font.glyph_height, 6);

    let term = Terminal::open(
        HeadlessBackend::new(),
        TerminalOptions::new(20, 10).font(font),
    )
    .unwrap();
    assert_eq!(term.glyph_width(), 4);
    assert_eq!(term.glyph_height(), 6);
    assert_eq!(term.frame().width(), 80);
}

#[test]
fn test_load_font_resizes_surface() {
    let mut term = open_80x25();
    let font = FontBitmap::from_table(vec![0u8; 256 * 256], 256, 256);
    term.load_font(&font).unwrap();
    assert_eq!(term.glyph_width(), 16);
    assert_eq!(term.frame().width(), 80 * 16);
    // Grid dimensions are untouched by a font swap.
    assert_eq!(term.columns(), 80);
}

#[test]
fn test_load_font_rejects_bad_geometry() {
    let mut term = open_80x25();
    let bad = FontBitmap {
        pixels: vec![0; 16],
        width: 4,
        height: 4,
        glyph_width: 8,
        glyph_height: 8,
    };
    assert!(matches!(
        term.load_font(&bad),
        Err(Error::FontGeometry { .. })
    ));
    // The failed load left the previous atlas in place.
    assert_eq!(term.glyph_width(), 8);
}

#[test]
fn test_edge_color_reaches_present() {
    let mut term = open_80x25();
    term.set_edge_color(Rgb::new(0, 64, 0));
    term.flush().unwrap();
    assert_eq!(term.backend().last_edge(), Rgb::new(0, 64, 0));
}

#[test]
fn test_fullscreen_support_and_absence() {
    let mut term = open_80x25();
    term.set_fullscreen(true).unwrap();
    assert!(term.backend().is_fullscreen());

    let mut bare = Terminal::open(
        HeadlessBackend::without_fullscreen(),
        TerminalOptions::new(10, 10),
    )
    .unwrap();
    assert!(matches!(
        bare.set_fullscreen(true),
        Err(Error::Unsupported("fullscreen"))
    ));
}

#[test]
fn test_screenshot_roundtrip() {
    let mut term = open_80x25();
    term.grid_mut().fill(Cell::blank(Rgb::new(9, 8, 7)));
    term.flush().unwrap();

    let mut dump = vec![0u8; term.screenshot_len()];
    let written = term.dump_screenshot(&mut dump).unwrap();
    assert_eq!(written, 640 * 200 * 3);
    assert_eq!(&dump[..3], &[9, 8, 7]);
    assert_eq!(&dump[written - 3..written], &[9, 8, 7]);
}

#[test]
fn test_screenshot_undersized_buffer() {
    let term = open_80x25();
    let mut dump = vec![0u8; 10];
    assert!(matches!(
        term.dump_screenshot(&mut dump),
        Err(Error::BufferTooSmall { needed, got: 10 }) if needed == 640 * 200 * 3
    ));
}

#[test]
fn test_clock_is_monotonic() {
    let term = open_80x25();
    let a = term.elapsed().unwrap();
    term.sleep(std::time::Duration::from_millis(5));
    let b = term.elapsed().unwrap();
    assert!(b >= a);
}
