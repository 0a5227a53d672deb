//! End-to-end pixel checks for the flush path.

use rasterm::{Cell, HeadlessBackend, Rgb, TargetRect, Terminal, TerminalOptions};

fn open_80x25() -> Terminal<HeadlessBackend> {
    Terminal::open(HeadlessBackend::new(), TerminalOptions::new(80, 25)).unwrap()
}

#[test]
fn test_fresh_flush_is_all_black() {
    let mut term = open_80x25();
    term.flush().unwrap();
    let frame = term.backend().last_frame().unwrap();
    assert!(frame.pixels().iter().all(|p| *p == Rgb::BLACK));
}

#[test]
fn test_single_glyph_pixels() {
    let mut term = open_80x25();
    term.grid_mut()
        .set(0, 0, Cell::ascii('A', Rgb::WHITE, Rgb::BLUE));
    term.flush().unwrap();

    let frame = term.backend().last_frame().unwrap();
    // The embedded 'A' has a clear top-left corner and an inked pixel at
    // column 3 of its first row.
    assert_eq!(frame.get(0, 0), Some(Rgb::BLUE));
    assert_eq!(frame.get(3, 0), Some(Rgb::WHITE));
    // The neighboring cell is untouched.
    assert_eq!(frame.get(8, 0), Some(Rgb::BLACK));
}

#[test]
fn test_flush_is_idempotent() {
    let mut term = open_80x25();
    term.grid_mut().print(10, 12, "stable", Rgb::GREEN, Rgb::BLACK);
    term.flush().unwrap();
    let first = term.backend().last_frame().unwrap().clone();
    term.flush().unwrap();
    assert_eq!(term.backend().last_frame().unwrap(), &first);
}

#[test]
fn test_flush_reflects_grid_mutation() {
    let mut term = open_80x25();
    term.flush().unwrap();
    assert_eq!(term.backend().last_frame().unwrap().get(3, 0), Some(Rgb::BLACK));

    term.grid_mut()
        .set(0, 0, Cell::ascii('A', Rgb::RED, Rgb::BLACK));
    term.flush().unwrap();
    assert_eq!(term.backend().last_frame().unwrap().get(3, 0), Some(Rgb::RED));
}

#[test]
fn test_target_rect_floors_to_integer_scale() {
    let mut backend = HeadlessBackend::new();
    // 2.5x horizontal headroom, 5x vertical: factor floors to 2.
    backend.set_viewport(1600, 1000);
    let mut term = Terminal::open(backend, TerminalOptions::new(80, 25)).unwrap();
    term.flush().unwrap();

    let target = term.backend().last_target().unwrap();
    assert_eq!(
        target,
        TargetRect {
            x: (1600 - 1280) / 2,
            y: (1000 - 400) / 2,
            width: 1280,
            height: 400,
        }
    );
}

#[test]
fn test_target_rect_shrinks_to_fit() {
    let mut backend = HeadlessBackend::new();
    backend.set_viewport(320, 100);
    let mut term = Terminal::open(backend, TerminalOptions::new(80, 25)).unwrap();
    term.flush().unwrap();

    let target = term.backend().last_target().unwrap();
    assert!(target.width <= 320 && target.height <= 100);
    assert_eq!((target.x, target.y), (0, 0));
}

#[test]
fn test_interpolated_glyph_blends_colors() {
    // A custom font whose every pixel is weight 128 blends fg and bg
    // halfway on each channel.
    let font = rasterm::FontBitmap::from_table(vec![128u8; 128 * 128], 128, 128);
    let mut term = Terminal::open(
        HeadlessBackend::new(),
        TerminalOptions::new(4, 2).font(font),
    )
    .unwrap();
    term.grid_mut()
        .set(0, 0, Cell::new(b'x', Rgb::WHITE, Rgb::BLACK));
    term.flush().unwrap();

    let frame = term.backend().last_frame().unwrap();
    assert_eq!(frame.get(0, 0), Some(Rgb::new(128, 128, 128)));
}
