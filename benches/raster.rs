//! Rasterization and scaling performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use rasterm::{Cell, CellGrid, FontAtlas, FrameBuffer, Rgb, TargetRect};
use std::hint::black_box;

fn filled_grid(columns: u32, rows: u32) -> CellGrid {
    let mut grid = CellGrid::new(columns, rows);
    for y in 0..rows {
        for x in 0..columns {
            let symbol = (b' ' + ((x + y) % 94) as u8) as char;
            grid.set(x, y, Cell::ascii(symbol, Rgb::WHITE, Rgb::new(0, 0, 40)));
        }
    }
    grid
}

fn render_full_grid(c: &mut Criterion) {
    let atlas = FontAtlas::builtin(8, 8).unwrap();

    let grid = filled_grid(80, 25);
    let mut frame = FrameBuffer::new(640, 200);
    c.bench_function("render_grid_80x25", |b| {
        b.iter(|| frame.render_grid(black_box(&grid), black_box(&atlas)));
    });

    let grid = filled_grid(200, 60);
    let mut frame = FrameBuffer::new(1600, 480);
    c.bench_function("render_grid_200x60", |b| {
        b.iter(|| frame.render_grid(black_box(&grid), black_box(&atlas)));
    });
}

fn blit_single_glyph(c: &mut Criterion) {
    let atlas = FontAtlas::builtin(8, 8).unwrap();
    let mut frame = FrameBuffer::new(64, 64);

    c.bench_function("blit_glyph_8x8", |b| {
        b.iter(|| {
            frame.blit_glyph(
                black_box(&atlas),
                black_box(b'@'),
                Rgb::WHITE,
                Rgb::BLACK,
                8,
                8,
            );
        })
    });
}

fn frame_dump(c: &mut Criterion) {
    let frame = FrameBuffer::new(640, 200);
    let mut dest = vec![0u8; frame.byte_len()];

    c.bench_function("dump_rgb_640x200", |b| {
        b.iter(|| frame.dump_rgb(black_box(&mut dest)));
    });
}

fn target_rect(c: &mut Criterion) {
    c.bench_function("target_rect_compute", |b| {
        b.iter(|| {
            TargetRect::compute(
                black_box(1920),
                black_box(1080),
                black_box(640),
                black_box(200),
            )
        });
    });
}

criterion_group!(
    benches,
    render_full_grid,
    blit_single_glyph,
    frame_dump,
    target_rect
);
criterion_main!(benches);
