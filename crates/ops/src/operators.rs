use lopdf::content::Operation;
use lopdf::{Object, StringFormat};
use scrawl_types::{DashPattern, LineCapStyle};

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

// --- Graphics state ---

pub fn push_graphics_state() -> Operation {
    Operation::new("q", vec![])
}

pub fn pop_graphics_state() -> Operation {
    Operation::new("Q", vec![])
}

/// References a named entry in the page's ExtGState resource dictionary.
pub fn set_graphics_state(state_name: &str) -> Operation {
    Operation::new("gs", vec![name(state_name)])
}

pub fn set_line_width(width: f32) -> Operation {
    Operation::new("w", vec![width.into()])
}

pub fn set_line_cap(style: LineCapStyle) -> Operation {
    Operation::new("J", vec![Object::Integer(style.operand())])
}

pub fn set_dash_pattern(dash: &DashPattern) -> Operation {
    let array = dash.array.iter().map(|len| Object::Real(*len)).collect();
    Operation::new("d", vec![Object::Array(array), dash.phase.into()])
}

// --- Transforms ---
//
// Each of these concatenates one affine matrix onto the CTM. They are kept
// as four separate constructors instead of one matrix multiply so callers
// control composition order explicitly.

pub fn translate(x: f32, y: f32) -> Operation {
    Operation::new(
        "cm",
        vec![1.into(), 0.into(), 0.into(), 1.into(), x.into(), y.into()],
    )
}

pub fn rotate_radians(angle: f32) -> Operation {
    let (sin, cos) = angle.sin_cos();
    Operation::new(
        "cm",
        vec![
            cos.into(),
            sin.into(),
            (-sin).into(),
            cos.into(),
            0.into(),
            0.into(),
        ],
    )
}

pub fn scale(x_scale: f32, y_scale: f32) -> Operation {
    Operation::new(
        "cm",
        vec![
            x_scale.into(),
            0.into(),
            0.into(),
            y_scale.into(),
            0.into(),
            0.into(),
        ],
    )
}

pub fn skew_radians(x_skew_angle: f32, y_skew_angle: f32) -> Operation {
    Operation::new(
        "cm",
        vec![
            1.into(),
            x_skew_angle.tan().into(),
            y_skew_angle.tan().into(),
            1.into(),
            0.into(),
            0.into(),
        ],
    )
}

// --- Text ---

pub fn begin_text() -> Operation {
    Operation::new("BT", vec![])
}

pub fn end_text() -> Operation {
    Operation::new("ET", vec![])
}

pub fn set_font_and_size(font: &str, size: f32) -> Operation {
    Operation::new("Tf", vec![name(font), size.into()])
}

pub fn set_line_height(line_height: f32) -> Operation {
    Operation::new("TL", vec![line_height.into()])
}

pub fn set_text_matrix(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Operation {
    Operation::new(
        "Tm",
        vec![a.into(), b.into(), c.into(), d.into(), e.into(), f.into()],
    )
}

/// Sets the text matrix from the three normalized angles and the anchor
/// point in one instruction: rotation and both skews land in the matrix's
/// linear part, the anchor in its translation part.
pub fn rotate_and_skew_text_radians_and_translate(
    rotation_angle: f32,
    x_skew_angle: f32,
    y_skew_angle: f32,
    x: f32,
    y: f32,
) -> Operation {
    let (sin, cos) = rotation_angle.sin_cos();
    set_text_matrix(
        cos,
        sin + x_skew_angle.tan(),
        -sin + y_skew_angle.tan(),
        cos,
        x,
        y,
    )
}

/// Shows one run of already-encoded text. The bytes are emitted as a hex
/// string so any encoding survives the content stream unescaped.
pub fn show_text(encoded: &[u8]) -> Operation {
    Operation::new(
        "Tj",
        vec![Object::String(encoded.to_vec(), StringFormat::Hexadecimal)],
    )
}

pub fn next_line() -> Operation {
    Operation::new("T*", vec![])
}

// --- Path construction ---

pub fn move_to(x: f32, y: f32) -> Operation {
    Operation::new("m", vec![x.into(), y.into()])
}

pub fn line_to(x: f32, y: f32) -> Operation {
    Operation::new("l", vec![x.into(), y.into()])
}

pub fn append_bezier_curve(
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
) -> Operation {
    Operation::new(
        "c",
        vec![
            x1.into(),
            y1.into(),
            x2.into(),
            y2.into(),
            x3.into(),
            y3.into(),
        ],
    )
}

pub fn close_path() -> Operation {
    Operation::new("h", vec![])
}

// --- Painting ---

pub fn fill() -> Operation {
    Operation::new("f", vec![])
}

pub fn stroke() -> Operation {
    Operation::new("S", vec![])
}

pub fn fill_and_stroke() -> Operation {
    Operation::new("B", vec![])
}

// --- External objects ---

/// Invokes a named XObject (image or embedded page) from the page resources.
pub fn draw_object(object_name: &str) -> Operation {
    Operation::new("Do", vec![name(object_name)])
}
