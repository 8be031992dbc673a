//! Drawing-compiler micro-benchmarks.
//!
//! Measures how fast each primitive compiles to its operation sequence;
//! none of these touch a document, so the numbers isolate the compiler.

use criterion::{criterion_group, criterion_main, Criterion};
use scrawl::{
    draw_ellipse, draw_rectangle, draw_svg_path, draw_text, Angle, Color, DrawEllipseOptions,
    DrawRectangleOptions, DrawSvgPathOptions, DrawTextOptions, Point,
};
use std::hint::black_box;

const GLYPH_PATH: &str =
    "M 10 80 C 40 10 65 10 95 80 S 150 150 180 80 Q 200 40 220 80 T 260 80 A 30 30 0 0 1 320 80 Z";

fn bench_text(c: &mut Criterion) {
    let options = DrawTextOptions {
        color: Color::rgb(0.0, 0.0, 0.0),
        font: "F1".to_string(),
        size: 12.0,
        rotate: Angle::Degrees(30.0),
        x_skew: Angle::Degrees(0.0),
        y_skew: Angle::Degrees(0.0),
        position: Point::new(72.0, 700.0),
        graphics_state: None,
    };
    c.bench_function("compile_text", |b| {
        b.iter(|| draw_text(black_box(b"benchmark line"), black_box(&options)))
    });
}

fn bench_rectangle(c: &mut Criterion) {
    let options = DrawRectangleOptions {
        position: Point::new(10.0, 10.0),
        width: 200.0,
        height: 100.0,
        border_width: 1.0,
        color: Some(Color::rgb(0.2, 0.3, 0.4)),
        border_color: Some(Color::grayscale(0.0)),
        rotate: Angle::Degrees(15.0),
        x_skew: Angle::Degrees(0.0),
        y_skew: Angle::Degrees(0.0),
        border_dash: None,
        graphics_state: None,
    };
    c.bench_function("compile_rectangle", |b| {
        b.iter(|| draw_rectangle(black_box(&options)))
    });
}

fn bench_ellipse(c: &mut Criterion) {
    let options = DrawEllipseOptions {
        position: Point::new(300.0, 400.0),
        x_scale: 80.0,
        y_scale: 40.0,
        color: Some(Color::cmyk(0.1, 0.2, 0.3, 0.0)),
        border_color: None,
        border_width: 0.0,
        border_dash: None,
        graphics_state: None,
    };
    c.bench_function("compile_ellipse", |b| {
        b.iter(|| draw_ellipse(black_box(&options)))
    });
}

fn bench_svg_path(c: &mut Criterion) {
    let options = DrawSvgPathOptions {
        position: Point::new(100.0, 100.0),
        scale: Some(2.0),
        color: Some(Color::grayscale(0.4)),
        border_color: None,
        border_width: 0.0,
        border_dash: None,
        graphics_state: None,
    };
    c.bench_function("compile_svg_path", |b| {
        b.iter(|| draw_svg_path(black_box(GLYPH_PATH), black_box(&options)))
    });
}

criterion_group!(benches, bench_text, bench_rectangle, bench_ellipse, bench_svg_path);
criterion_main!(benches);
