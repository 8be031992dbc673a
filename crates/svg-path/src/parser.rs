use crate::arc::{arc_to_cubics, quad_to_cubic};
use thiserror::Error;

/// One absolute-coordinate path segment.
///
/// Quadratics and arcs never survive parsing; they are normalized to
/// [`PathSegment::CurveTo`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    CurveTo(f32, f32, f32, f32, f32, f32),
    Close,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathDataError {
    #[error("unrecognized path command '{command}' at byte {offset}")]
    UnrecognizedCommand { command: char, offset: usize },
    #[error("expected a number at byte {offset}")]
    ExpectedNumber { offset: usize },
    #[error("expected an arc flag (0 or 1) at byte {offset}")]
    ExpectedArcFlag { offset: usize },
}

/// Parses SVG path data into absolute path segments.
pub fn parse_path_data(data: &str) -> Result<Vec<PathSegment>, PathDataError> {
    let (segments, error) = parse_prefix(data);
    match error {
        Some(error) => Err(error),
        None => Ok(segments),
    }
}

/// Parses as far as the data is well-formed, returning the segments for the
/// valid prefix together with the error that stopped the parse, if any.
pub(crate) fn parse_prefix(data: &str) -> (Vec<PathSegment>, Option<PathDataError>) {
    Parser::new(data).run()
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    segments: Vec<PathSegment>,
    cur: (f32, f32),
    start: (f32, f32),
    last_cubic_ctrl: Option<(f32, f32)>,
    last_quad_ctrl: Option<(f32, f32)>,
}

impl<'a> Parser<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
            segments: Vec::new(),
            cur: (0.0, 0.0),
            start: (0.0, 0.0),
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    fn run(mut self) -> (Vec<PathSegment>, Option<PathDataError>) {
        loop {
            self.skip_separators();
            let Some(byte) = self.byte_at(self.pos) else {
                return (self.segments, None);
            };
            let offset = self.pos;
            let command = byte as char;
            if !command.is_ascii_alphabetic() {
                let error = PathDataError::UnrecognizedCommand { command, offset };
                return (self.segments, Some(error));
            }
            self.pos += 1;
            if let Err(error) = self.command(command, offset) {
                return (self.segments, Some(error));
            }
        }
    }

    fn command(&mut self, command: char, offset: usize) -> Result<(), PathDataError> {
        let relative = command.is_ascii_lowercase();
        match command {
            'M' | 'm' => {
                let (x, y) = self.coordinate_pair(relative)?;
                self.segments.push(PathSegment::MoveTo(x, y));
                self.cur = (x, y);
                self.start = (x, y);
                self.clear_control_points();
                // Subsequent coordinate pairs are implicit line-tos.
                while self.at_number() {
                    let (x, y) = self.coordinate_pair(relative)?;
                    self.segments.push(PathSegment::LineTo(x, y));
                    self.cur = (x, y);
                }
            }
            'L' | 'l' => {
                loop {
                    let (x, y) = self.coordinate_pair(relative)?;
                    self.segments.push(PathSegment::LineTo(x, y));
                    self.cur = (x, y);
                    if !self.at_number() {
                        break;
                    }
                }
                self.clear_control_points();
            }
            'H' | 'h' => {
                loop {
                    let value = self.number()?;
                    let x = if relative { self.cur.0 + value } else { value };
                    self.segments.push(PathSegment::LineTo(x, self.cur.1));
                    self.cur.0 = x;
                    if !self.at_number() {
                        break;
                    }
                }
                self.clear_control_points();
            }
            'V' | 'v' => {
                loop {
                    let value = self.number()?;
                    let y = if relative { self.cur.1 + value } else { value };
                    self.segments.push(PathSegment::LineTo(self.cur.0, y));
                    self.cur.1 = y;
                    if !self.at_number() {
                        break;
                    }
                }
                self.clear_control_points();
            }
            'C' | 'c' => loop {
                let (x1, y1) = self.coordinate_pair(relative)?;
                let (x2, y2) = self.coordinate_pair(relative)?;
                let (x, y) = self.coordinate_pair(relative)?;
                self.segments.push(PathSegment::CurveTo(x1, y1, x2, y2, x, y));
                self.cur = (x, y);
                self.last_cubic_ctrl = Some((x2, y2));
                self.last_quad_ctrl = None;
                if !self.at_number() {
                    break;
                }
            },
            'S' | 's' => loop {
                let (x2, y2) = self.coordinate_pair(relative)?;
                let (x, y) = self.coordinate_pair(relative)?;
                let (x1, y1) = match self.last_cubic_ctrl {
                    Some((px, py)) => (2.0 * self.cur.0 - px, 2.0 * self.cur.1 - py),
                    None => self.cur,
                };
                self.segments.push(PathSegment::CurveTo(x1, y1, x2, y2, x, y));
                self.cur = (x, y);
                self.last_cubic_ctrl = Some((x2, y2));
                self.last_quad_ctrl = None;
                if !self.at_number() {
                    break;
                }
            },
            'Q' | 'q' => loop {
                let (qx, qy) = self.coordinate_pair(relative)?;
                let (x, y) = self.coordinate_pair(relative)?;
                let (x1, y1, x2, y2) = quad_to_cubic(self.cur.0, self.cur.1, qx, qy, x, y);
                self.segments.push(PathSegment::CurveTo(x1, y1, x2, y2, x, y));
                self.cur = (x, y);
                self.last_quad_ctrl = Some((qx, qy));
                self.last_cubic_ctrl = Some((x2, y2));
                if !self.at_number() {
                    break;
                }
            },
            'T' | 't' => loop {
                let (x, y) = self.coordinate_pair(relative)?;
                let (qx, qy) = match self.last_quad_ctrl {
                    Some((px, py)) => (2.0 * self.cur.0 - px, 2.0 * self.cur.1 - py),
                    None => self.cur,
                };
                let (x1, y1, x2, y2) = quad_to_cubic(self.cur.0, self.cur.1, qx, qy, x, y);
                self.segments.push(PathSegment::CurveTo(x1, y1, x2, y2, x, y));
                self.cur = (x, y);
                self.last_quad_ctrl = Some((qx, qy));
                self.last_cubic_ctrl = Some((x2, y2));
                if !self.at_number() {
                    break;
                }
            },
            'A' | 'a' => loop {
                let rx = self.number()?;
                let ry = self.number()?;
                let rotation = self.number()?;
                let large_arc = self.arc_flag()?;
                let sweep = self.arc_flag()?;
                let (x, y) = self.coordinate_pair(relative)?;
                let curves =
                    arc_to_cubics(self.cur.0, self.cur.1, rx, ry, rotation, large_arc, sweep, x, y);
                self.last_cubic_ctrl = curves.iter().rev().find_map(|segment| match *segment {
                    PathSegment::CurveTo(_, _, x2, y2, _, _) => Some((x2, y2)),
                    _ => None,
                });
                self.segments.extend(curves);
                self.cur = (x, y);
                self.last_quad_ctrl = None;
                if !self.at_number() {
                    break;
                }
            },
            'Z' | 'z' => {
                self.segments.push(PathSegment::Close);
                self.cur = self.start;
                self.clear_control_points();
            }
            other => {
                return Err(PathDataError::UnrecognizedCommand { command: other, offset });
            }
        }
        Ok(())
    }

    fn clear_control_points(&mut self) {
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    fn coordinate_pair(&mut self, relative: bool) -> Result<(f32, f32), PathDataError> {
        let x = self.number()?;
        let y = self.number()?;
        if relative {
            Ok((self.cur.0 + x, self.cur.1 + y))
        } else {
            Ok((x, y))
        }
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(byte) = self.byte_at(self.pos) {
            if byte.is_ascii_whitespace() || byte == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn at_number(&mut self) -> bool {
        self.skip_separators();
        matches!(self.byte_at(self.pos), Some(b'0'..=b'9' | b'.' | b'+' | b'-'))
    }

    fn number(&mut self) -> Result<f32, PathDataError> {
        self.skip_separators();
        let begin = self.pos;
        let mut end = begin;
        if matches!(self.byte_at(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let mut digits = 0;
        while matches!(self.byte_at(end), Some(b'0'..=b'9')) {
            end += 1;
            digits += 1;
        }
        if matches!(self.byte_at(end), Some(b'.')) {
            end += 1;
            while matches!(self.byte_at(end), Some(b'0'..=b'9')) {
                end += 1;
                digits += 1;
            }
        }
        if digits == 0 {
            return Err(PathDataError::ExpectedNumber { offset: begin });
        }
        if matches!(self.byte_at(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(self.byte_at(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let mut exp_digits = 0;
            while matches!(self.byte_at(exp_end), Some(b'0'..=b'9')) {
                exp_end += 1;
                exp_digits += 1;
            }
            if exp_digits > 0 {
                end = exp_end;
            }
        }
        let text = std::str::from_utf8(&self.bytes[begin..end])
            .map_err(|_| PathDataError::ExpectedNumber { offset: begin })?;
        let value = text
            .parse::<f32>()
            .map_err(|_| PathDataError::ExpectedNumber { offset: begin })?;
        self.pos = end;
        Ok(value)
    }

    fn arc_flag(&mut self) -> Result<bool, PathDataError> {
        self.skip_separators();
        match self.byte_at(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => Err(PathDataError::ExpectedArcFlag { offset: self.pos }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_move_and_lines() {
        let segments = parse_path_data("M 0 0 L 10 0 L 10 10 Z").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(0.0, 0.0),
                PathSegment::LineTo(10.0, 0.0),
                PathSegment::LineTo(10.0, 10.0),
                PathSegment::Close,
            ]
        );
    }

    #[test]
    fn test_relative_commands_accumulate() {
        let segments = parse_path_data("m 5 5 l 10 0 v 10 h -10 z").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(5.0, 5.0),
                PathSegment::LineTo(15.0, 5.0),
                PathSegment::LineTo(15.0, 15.0),
                PathSegment::LineTo(5.0, 15.0),
                PathSegment::Close,
            ]
        );
    }

    #[test]
    fn test_implicit_line_tos_after_move() {
        let segments = parse_path_data("M 0 0 10 0 10 10").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::MoveTo(0.0, 0.0),
                PathSegment::LineTo(10.0, 0.0),
                PathSegment::LineTo(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_comma_separation_and_compact_negatives() {
        let segments = parse_path_data("M1,2L3-4").unwrap();
        assert_eq!(
            segments,
            vec![PathSegment::MoveTo(1.0, 2.0), PathSegment::LineTo(3.0, -4.0)]
        );
    }

    #[test]
    fn test_cubic_and_smooth_continuation() {
        let segments = parse_path_data("M 0 0 C 1 1 2 1 3 0 S 5 -1 6 0").unwrap();
        assert_eq!(segments.len(), 3);
        // The smooth segment's first control point reflects (2, 1) about (3, 0).
        match segments[2] {
            PathSegment::CurveTo(x1, y1, _, _, x, y) => {
                assert_eq!((x1, y1), (4.0, -1.0));
                assert_eq!((x, y), (6.0, 0.0));
            }
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn test_quadratic_is_lifted_to_cubic() {
        let segments = parse_path_data("M 0 0 Q 3 6 6 0").unwrap();
        match segments[1] {
            PathSegment::CurveTo(x1, y1, x2, y2, x, y) => {
                assert_eq!((x1, y1), (2.0, 4.0));
                assert_eq!((x2, y2), (4.0, 4.0));
                assert_eq!((x, y), (6.0, 0.0));
            }
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn test_smooth_quadratic_reflects_control() {
        let segments = parse_path_data("M 0 0 Q 3 6 6 0 T 12 0").unwrap();
        assert_eq!(segments.len(), 3);
        match segments[2] {
            PathSegment::CurveTo(_, _, _, _, x, y) => assert_eq!((x, y), (12.0, 0.0)),
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn test_arc_with_compact_flags() {
        // Flags may run together with the following coordinates.
        let segments = parse_path_data("M10 10 A5 5 0 0130 10").unwrap();
        assert!(segments.len() >= 2);
        let last = segments.last().unwrap();
        match *last {
            PathSegment::CurveTo(_, _, _, _, x, y) => {
                assert!((x - 30.0).abs() < 1e-3);
                assert!((y - 10.0).abs() < 1e-3);
            }
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn test_scientific_notation() {
        let segments = parse_path_data("M 1e1 -2.5e-1").unwrap();
        assert_eq!(segments, vec![PathSegment::MoveTo(10.0, -0.25)]);
    }

    #[test]
    fn test_close_resets_current_point() {
        let segments = parse_path_data("M 5 5 L 10 5 Z l 1 1").unwrap();
        assert_eq!(segments.last(), Some(&PathSegment::LineTo(6.0, 6.0)));
    }

    #[test]
    fn test_unrecognized_command_reports_offset() {
        let error = parse_path_data("M 0 0 # 1 2").unwrap_err();
        assert_eq!(
            error,
            PathDataError::UnrecognizedCommand { command: '#', offset: 6 }
        );
    }

    #[test]
    fn test_missing_number_reports_offset() {
        let error = parse_path_data("M 0").unwrap_err();
        assert!(matches!(error, PathDataError::ExpectedNumber { .. }));
    }

    #[test]
    fn test_prefix_survives_malformed_tail() {
        let (segments, error) = parse_prefix("M 0 0 L 1 1 L x");
        assert_eq!(segments.len(), 2);
        assert!(error.is_some());
    }
}
