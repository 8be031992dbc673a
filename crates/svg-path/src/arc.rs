use crate::parser::PathSegment;
use std::f32::consts::PI;

/// Lifts a quadratic Bezier onto the cubic control polygon.
pub(crate) fn quad_to_cubic(
    x0: f32,
    y0: f32,
    qx: f32,
    qy: f32,
    x: f32,
    y: f32,
) -> (f32, f32, f32, f32) {
    let x1 = x0 + (2.0 / 3.0) * (qx - x0);
    let y1 = y0 + (2.0 / 3.0) * (qy - y0);
    let x2 = x + (2.0 / 3.0) * (qx - x);
    let y2 = y + (2.0 / 3.0) * (qy - y);
    (x1, y1, x2, y2)
}

/// Converts an endpoint-parameterized elliptical arc into cubic Bezier
/// segments, following the center parameterization of the SVG 1.1
/// implementation notes. The sweep is split into quarter-turn segments at
/// most, which keeps the cubic approximation error well below a thousandth
/// of the radius.
#[allow(clippy::too_many_arguments)]
pub(crate) fn arc_to_cubics(
    x0: f32,
    y0: f32,
    rx_in: f32,
    ry_in: f32,
    x_axis_rotation_deg: f32,
    large_arc: bool,
    sweep: bool,
    x1: f32,
    y1: f32,
) -> Vec<PathSegment> {
    let mut rx = rx_in.abs();
    let mut ry = ry_in.abs();
    // Degenerate radii collapse the arc to a line, per the SVG notes.
    if rx == 0.0 || ry == 0.0 || (x0 == x1 && y0 == y1) {
        return vec![PathSegment::LineTo(x1, y1)];
    }

    let phi = x_axis_rotation_deg.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let dx2 = (x0 - x1) / 2.0;
    let dy2 = (y0 - y1) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Scale the radii up if the endpoints are out of reach.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;
    let numerator = (rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2).max(0.0);
    let denominator = rx2 * y1p2 + ry2 * x1p2;
    let mut coefficient = 0.0;
    if denominator != 0.0 {
        let sign = if large_arc == sweep { -1.0 } else { 1.0 };
        coefficient = sign * (numerator / denominator).sqrt();
    }
    let cxp = coefficient * (rx * y1p / ry);
    let cyp = coefficient * (-ry * x1p / rx);

    let cx = cos_phi * cxp - sin_phi * cyp + (x0 + x1) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (y0 + y1) / 2.0;

    fn angle(ux: f32, uy: f32, vx: f32, vy: f32) -> f32 {
        let dot = ux * vx + uy * vy;
        let det = ux * vy - uy * vx;
        det.atan2(dot)
    }

    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;

    let theta1 = angle(1.0, 0.0, ux, uy);
    let mut delta = angle(ux, uy, vx, vy);
    if !sweep && delta > 0.0 {
        delta -= 2.0 * PI;
    } else if sweep && delta < 0.0 {
        delta += 2.0 * PI;
    }

    let segment_count = ((delta.abs() / (PI / 2.0)).ceil() as usize).max(1);
    let segment_sweep = delta / segment_count as f32;
    let alpha = (4.0 / 3.0) * (segment_sweep / 4.0).tan();

    let point = |theta: f32| -> (f32, f32) {
        let (sin_t, cos_t) = theta.sin_cos();
        (
            cx + rx * cos_phi * cos_t - ry * sin_phi * sin_t,
            cy + rx * sin_phi * cos_t + ry * cos_phi * sin_t,
        )
    };
    let derivative = |theta: f32| -> (f32, f32) {
        let (sin_t, cos_t) = theta.sin_cos();
        (
            -rx * cos_phi * sin_t - ry * sin_phi * cos_t,
            -rx * sin_phi * sin_t + ry * cos_phi * cos_t,
        )
    };

    let mut segments = Vec::with_capacity(segment_count);
    let mut theta = theta1;
    for index in 0..segment_count {
        let theta_next = theta + segment_sweep;
        let (px1, py1) = point(theta);
        let (dx1, dy1) = derivative(theta);
        let (dx2b, dy2b) = derivative(theta_next);
        // Land the final segment exactly on the requested endpoint.
        let (px2, py2) = if index == segment_count - 1 {
            (x1, y1)
        } else {
            point(theta_next)
        };
        segments.push(PathSegment::CurveTo(
            px1 + alpha * dx1,
            py1 + alpha * dy1,
            px2 - alpha * dx2b,
            py2 - alpha * dy2b,
            px2,
            py2,
        ));
        theta = theta_next;
    }
    segments
}
