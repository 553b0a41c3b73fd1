//! Serializing paths back into SVG path data.
//!
//! Coordinates are rounded to a fixed number of decimals (3 by default) so
//! that the output is compact and stable across runs.

use crate::math::Point;
use crate::path::Path;
use crate::PathEvent;

/// Number of decimals kept in serialized path data.
pub const DEFAULT_PRECISION: usize = 3;

/// Builds a `String` representation of a path using the SVG path syntax.
///
/// Only absolute commands are emitted.
pub struct PathSerializer {
    path: String,
    precision: usize,
}

impl PathSerializer {
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    pub fn with_precision(precision: usize) -> Self {
        PathSerializer {
            path: String::new(),
            precision,
        }
    }

    pub fn move_to(&mut self, to: Point) {
        self.command('M');
        self.coords(&[to.x, to.y]);
    }

    pub fn line_to(&mut self, to: Point) {
        self.command('L');
        self.coords(&[to.x, to.y]);
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.command('Q');
        self.coords(&[ctrl.x, ctrl.y, to.x, to.y]);
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.command('C');
        self.coords(&[ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y]);
    }

    pub fn close(&mut self) {
        self.command('Z');
    }

    pub fn build(self) -> String {
        self.path
    }

    fn command(&mut self, cmd: char) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        self.path.push(cmd);
    }

    fn coords(&mut self, values: &[f32]) {
        for value in values {
            self.path.push(' ');
            write_coord(&mut self.path, *value, self.precision);
        }
    }
}

impl Default for PathSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes a path into SVG path data with the default precision.
pub fn path_to_svg(path: &Path) -> String {
    path_to_svg_with_precision(path, DEFAULT_PRECISION)
}

/// Serializes a path into SVG path data, rounding coordinates to `precision`
/// decimals.
pub fn path_to_svg_with_precision(path: &Path, precision: usize) -> String {
    let mut serializer = PathSerializer::with_precision(precision);
    for evt in path {
        match evt {
            PathEvent::Begin { at } => serializer.move_to(at),
            PathEvent::Line { to, .. } => serializer.line_to(to),
            PathEvent::Quadratic { ctrl, to, .. } => serializer.quadratic_bezier_to(ctrl, to),
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => serializer.cubic_bezier_to(ctrl1, ctrl2, to),
            PathEvent::End { close: true, .. } => serializer.close(),
            PathEvent::End { close: false, .. } => {}
        }
    }

    serializer.build()
}

fn write_coord(out: &mut String, value: f32, precision: usize) {
    let mut formatted = format!("{:.*}", precision, value);
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    if formatted == "-0" {
        formatted.clear();
        formatted.push('0');
    }
    out.push_str(&formatted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;
    use crate::parser::parse_path_data;

    #[test]
    fn serialize_square() {
        let path = parse_path_data("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
        assert_eq!(path_to_svg(&path), "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    }

    #[test]
    fn rounding() {
        let mut serializer = PathSerializer::new();
        serializer.move_to(point(1.00049, 2.5));
        serializer.line_to(point(-0.0001, 3.1415927));
        let out = serializer.build();
        assert_eq!(out, "M 1 2.5 L 0 3.142");
    }

    #[test]
    fn curves_round_trip() {
        let src = "M 0 0 C 1.5 1 2 1 3 0 Q 4 -1 5 0 Z";
        let path = parse_path_data(src).unwrap();
        assert_eq!(path_to_svg(&path), src);
    }
}
