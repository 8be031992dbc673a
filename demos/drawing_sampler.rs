//! Renders one page exercising every drawing primitive and writes it to
//! `drawing_sampler.pdf` in the current directory.
//!
//! Run with: `cargo run --example drawing_sampler`

use lopdf::content::Content;
use lopdf::{dictionary, Document, Stream};
use scrawl::{
    draw_ellipse, draw_line, draw_lines_of_text, draw_page, draw_rectangle, draw_svg_path,
    draw_text, Angle, Color, DashPattern, DrawEllipseOptions, DrawLineOptions,
    DrawLinesOfTextOptions, DrawPageOptions, DrawRectangleOptions, DrawSvgPathOptions,
    DrawTextOptions, LineCapStyle, Point,
};

const HEART: &str = "M 50 30 A 20 20 0 0 1 90 30 C 90 55 50 80 50 80 C 50 80 10 55 10 30 A 20 20 0 0 1 50 30 Z";

fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}

fn page_operations() -> Vec<lopdf::content::Operation> {
    let mut operations = Vec::new();

    operations.extend(draw_text(
        &win_ansi("scrawl drawing sampler"),
        &DrawTextOptions {
            color: Color::rgb(0.1, 0.1, 0.4),
            font: "F1".to_string(),
            size: 24.0,
            rotate: Angle::Degrees(0.0),
            x_skew: Angle::Degrees(0.0),
            y_skew: Angle::Degrees(0.0),
            position: Point::new(72.0, 730.0),
            graphics_state: None,
        },
    ));

    operations.extend(draw_lines_of_text(
        &[
            win_ansi("Each primitive compiles to one balanced"),
            win_ansi("save/restore bracket of content operations."),
        ],
        &DrawLinesOfTextOptions {
            color: Color::grayscale(0.2),
            font: "F1".to_string(),
            size: 12.0,
            line_height: 15.0,
            rotate: Angle::Degrees(0.0),
            x_skew: Angle::Degrees(0.0),
            y_skew: Angle::Degrees(0.0),
            position: Point::new(72.0, 700.0),
            graphics_state: None,
        },
    ));

    operations.extend(draw_line(&DrawLineOptions {
        start: Point::new(72.0, 680.0),
        end: Point::new(540.0, 680.0),
        thickness: 1.5,
        color: Some(Color::rgb(0.6, 0.1, 0.1)),
        line_cap: Some(LineCapStyle::Round),
        dash: Some(DashPattern::dashed(6.0, 3.0)),
        graphics_state: None,
    }));

    operations.extend(draw_rectangle(&DrawRectangleOptions {
        position: Point::new(72.0, 520.0),
        width: 180.0,
        height: 90.0,
        border_width: 2.0,
        color: Some(Color::rgb(0.95, 0.9, 0.6)),
        border_color: Some(Color::grayscale(0.1)),
        rotate: Angle::Degrees(4.0),
        x_skew: Angle::Degrees(0.0),
        y_skew: Angle::Degrees(0.0),
        border_dash: None,
        graphics_state: None,
    }));

    operations.extend(draw_ellipse(&DrawEllipseOptions {
        position: Point::new(400.0, 560.0),
        x_scale: 80.0,
        y_scale: 45.0,
        color: Some(Color::cmyk(0.4, 0.0, 0.3, 0.0)),
        border_color: Some(Color::grayscale(0.0)),
        border_width: 1.0,
        border_dash: None,
        graphics_state: Some("GS1".to_string()),
    }));

    operations.extend(draw_svg_path(
        HEART,
        &DrawSvgPathOptions {
            position: Point::new(110.0, 470.0),
            scale: Some(1.4),
            color: Some(Color::rgb(0.85, 0.15, 0.25)),
            border_color: Some(Color::grayscale(0.1)),
            border_width: 1.0,
            border_dash: None,
            graphics_state: None,
        },
    ));

    // The badge is a form XObject defined in the page resources below.
    operations.extend(draw_page(
        "Badge",
        &DrawPageOptions {
            position: Point::new(380.0, 320.0),
            x_scale: 1.0,
            y_scale: 1.0,
            rotate: Angle::Degrees(-10.0),
            x_skew: Angle::Degrees(0.0),
            y_skew: Angle::Degrees(0.0),
            graphics_state: None,
        },
    ));

    operations
}

fn badge_xobject() -> Result<Stream, Box<dyn std::error::Error>> {
    let mut operations = Vec::new();
    operations.extend(draw_rectangle(&DrawRectangleOptions {
        position: Point::zero(),
        width: 120.0,
        height: 40.0,
        border_width: 1.0,
        color: Some(Color::grayscale(0.85)),
        border_color: Some(Color::grayscale(0.2)),
        rotate: Angle::Degrees(0.0),
        x_skew: Angle::Degrees(0.0),
        y_skew: Angle::Degrees(0.0),
        border_dash: None,
        graphics_state: None,
    }));
    operations.extend(draw_text(
        &win_ansi("embedded badge"),
        &DrawTextOptions {
            color: Color::grayscale(0.0),
            font: "F1".to_string(),
            size: 11.0,
            rotate: Angle::Degrees(0.0),
            x_skew: Angle::Degrees(0.0),
            y_skew: Angle::Degrees(0.0),
            position: Point::new(12.0, 15.0),
            graphics_state: None,
        },
    ));

    let content = Content { operations };
    Ok(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![0.into(), 0.into(), 120.into(), 40.into()],
        },
        content.encode()?,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let badge_id = doc.add_object(badge_xobject()?);
    let gs_id = doc.add_object(dictionary! {
        "Type" => "ExtGState",
        "ca" => 0.6,
        "CA" => 0.8,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
        "XObject" => dictionary! { "Badge" => badge_id },
        "ExtGState" => dictionary! { "GS1" => gs_id },
    });

    let content = Content { operations: page_operations() };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1_i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save("drawing_sampler.pdf")?;
    log::info!("wrote drawing_sampler.pdf");
    Ok(())
}
