//! Parsing SVG path data into a [`Path`](../path/struct.Path.html).
//!
//! The supported syntax is the SVG path syntax without elliptical arcs: the
//! raster-to-vector tracers this crate consumes only ever emit move-to,
//! line-to, curve-to (and their shorthands) and close commands.

use crate::math::{point, Point};
use crate::path::{Builder, Path};

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo {
        command: char,
        line: i32,
        column: i32,
    },
}

// A buffered iterator of characters keeping track of line and column.
struct Source<'l> {
    src: std::str::Chars<'l>,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<'l> Source<'l> {
    fn new(src: &'l str) -> Self {
        let mut src = src.chars();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// Parses SVG path data and returns the resulting [`Path`].
///
/// ```
/// # use polytrace_path::parse_path_data;
/// let path = parse_path_data("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
/// assert_eq!(path.first_endpoint(), Some(polytrace_path::math::point(0.0, 0.0)));
/// ```
pub fn parse_path_data(src: &str) -> Result<Path, ParseError> {
    let mut builder = Path::builder();
    PathParser::new().parse(src, &mut builder)?;

    Ok(builder.build())
}

/// A context object for parsing SVG path syntax into a path
/// [`Builder`](../path/struct.Builder.html).
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    current_position: Point,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, src: &str, output: &mut Builder) -> Result<(), ParseError> {
        let mut src = Source::new(src);

        // Per-spec: "If a relative moveto (m) appears as the first element of
        // the path, then it is treated as a pair of absolute coordinates."
        self.current_position = point(0.0, 0.0);
        let mut first_position = point(0.0, 0.0);

        let mut need_start = true;
        let mut need_end = false;
        let mut prev_cubic_ctrl = None;
        let mut prev_quadratic_ctrl = None;
        let mut implicit_cmd = 'M';

        src.skip_whitespace();

        while !src.finished {
            let mut cmd = src.current;
            let cmd_line = src.line;
            let cmd_col = src.col;

            if cmd.is_ascii_alphabetic() {
                src.advance_one();
            } else {
                cmd = implicit_cmd;
            }

            if need_start && cmd != 'm' && cmd != 'M' {
                return Err(ParseError::MissingMoveTo {
                    command: cmd,
                    line: cmd_line,
                    column: cmd_col,
                });
            }

            let is_relative = cmd.is_lowercase();

            match cmd {
                'l' | 'L' => {
                    let to = self.parse_endpoint(is_relative, &mut src)?;
                    output.line_to(to);
                }
                'h' | 'H' => {
                    let mut x = self.parse_number(&mut src)?;
                    if is_relative {
                        x += self.current_position.x;
                    }
                    let to = point(x, self.current_position.y);
                    self.current_position = to;
                    output.line_to(to);
                }
                'v' | 'V' => {
                    let mut y = self.parse_number(&mut src)?;
                    if is_relative {
                        y += self.current_position.y;
                    }
                    let to = point(self.current_position.x, y);
                    self.current_position = to;
                    output.line_to(to);
                }
                'q' | 'Q' => {
                    let ctrl = self.parse_point(is_relative, &mut src)?;
                    let to = self.parse_endpoint(is_relative, &mut src)?;
                    prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                't' | 'T' => {
                    let ctrl = self.get_smooth_ctrl(prev_quadratic_ctrl);
                    let to = self.parse_endpoint(is_relative, &mut src)?;
                    prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, &mut src)?;
                    let ctrl2 = self.parse_point(is_relative, &mut src)?;
                    let to = self.parse_endpoint(is_relative, &mut src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                's' | 'S' => {
                    let ctrl1 = self.get_smooth_ctrl(prev_cubic_ctrl);
                    let ctrl2 = self.parse_point(is_relative, &mut src)?;
                    let to = self.parse_endpoint(is_relative, &mut src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                'm' | 'M' => {
                    if need_end {
                        output.end(false);
                    }

                    let to = self.parse_endpoint(is_relative, &mut src)?;
                    first_position = to;
                    output.begin(to);
                    need_end = true;
                    need_start = false;
                }
                'z' | 'Z' => {
                    output.end(true);
                    self.current_position = first_position;
                    need_end = false;
                    need_start = true;
                }
                _ => {
                    return Err(ParseError::Command {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
            }

            match cmd {
                'c' | 'C' | 's' | 'S' => {
                    prev_quadratic_ctrl = None;
                }
                'q' | 'Q' | 't' | 'T' => {
                    prev_cubic_ctrl = None;
                }
                _ => {
                    prev_cubic_ctrl = None;
                    prev_quadratic_ctrl = None;
                }
            }

            implicit_cmd = match cmd {
                'm' => 'l',
                'M' => 'L',
                'z' => 'm',
                'Z' => 'M',
                c => c,
            };

            src.skip_whitespace();
        }

        Ok(())
    }

    fn get_smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        if let Some(prev_ctrl) = prev_ctrl {
            self.current_position + (self.current_position - prev_ctrl)
        } else {
            self.current_position
        }
    }

    fn parse_endpoint(
        &mut self,
        is_relative: bool,
        src: &mut Source,
    ) -> Result<Point, ParseError> {
        let position = self.parse_point(is_relative, src)?;
        self.current_position = position;

        Ok(position)
    }

    fn parse_point(&mut self, is_relative: bool, src: &mut Source) -> Result<Point, ParseError> {
        let mut x = self.parse_number(src)?;
        let mut y = self.parse_number(src)?;

        if is_relative {
            x += self.current_position.x;
            y += self.current_position.y;
        }

        Ok(point(x, y))
    }

    fn parse_number(&mut self, src: &mut Source) -> Result<f32, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        if src.current == '-' || src.current == '+' {
            if src.current == '-' {
                self.float_buffer.push('-');
            }
            src.advance_one();
        }

        while src.current.is_numeric() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_numeric() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' || src.current == '+' {
                if src.current == '-' {
                    self.float_buffer.push('-');
                }
                src.advance_one();
            }

            while src.current.is_numeric() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        match self.float_buffer.parse::<f32>() {
            Ok(val) => Ok(val),
            Err(_) => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathEvent;

    fn events(src: &str) -> Vec<PathEvent> {
        parse_path_data(src).unwrap().iter().collect()
    }

    #[test]
    fn empty() {
        assert_eq!(parse_path_data(""), Ok(Path::new()));
        assert_eq!(parse_path_data("   "), Ok(Path::new()));
    }

    #[test]
    fn square() {
        let evts = events("M 0 0 L 10 0 L 10 10 L 0 10 Z");
        assert_eq!(
            evts,
            vec![
                PathEvent::Begin { at: point(0.0, 0.0) },
                PathEvent::Line {
                    from: point(0.0, 0.0),
                    to: point(10.0, 0.0),
                },
                PathEvent::Line {
                    from: point(10.0, 0.0),
                    to: point(10.0, 10.0),
                },
                PathEvent::Line {
                    from: point(10.0, 10.0),
                    to: point(0.0, 10.0),
                },
                PathEvent::End {
                    last: point(0.0, 10.0),
                    first: point(0.0, 0.0),
                    close: true,
                },
            ]
        );
    }

    #[test]
    fn relative_and_implicit_commands() {
        // Implicit line-to after a move-to, relative commands, commas.
        let evts = events("m 1,1 2,0 l 0 2 h -2 v -2 z");
        assert_eq!(
            evts,
            vec![
                PathEvent::Begin { at: point(1.0, 1.0) },
                PathEvent::Line {
                    from: point(1.0, 1.0),
                    to: point(3.0, 1.0),
                },
                PathEvent::Line {
                    from: point(3.0, 1.0),
                    to: point(3.0, 3.0),
                },
                PathEvent::Line {
                    from: point(3.0, 3.0),
                    to: point(1.0, 3.0),
                },
                PathEvent::Line {
                    from: point(1.0, 3.0),
                    to: point(1.0, 1.0),
                },
                PathEvent::End {
                    last: point(1.0, 1.0),
                    first: point(1.0, 1.0),
                    close: true,
                },
            ]
        );
    }

    #[test]
    fn curves() {
        let evts = events("M 0 0 C 1 1 2 1 3 0 S 5 -1 6 0 Q 7 1 8 0 T 10 0");
        assert_eq!(evts.len(), 6);
        match evts[2] {
            // The smooth control point is the reflection of the previous one.
            PathEvent::Cubic { ctrl1, .. } => assert_eq!(ctrl1, point(4.0, -1.0)),
            _ => panic!("expected a cubic event, got {:?}", evts[2]),
        }
        match evts[4] {
            PathEvent::Quadratic { ctrl, .. } => assert_eq!(ctrl, point(9.0, -1.0)),
            _ => panic!("expected a quadratic event, got {:?}", evts[4]),
        }
    }

    #[test]
    fn several_subpaths() {
        let evts = events("M 0 0 L 1 0 Z M 5 5 L 6 5 Z");
        let begins = evts
            .iter()
            .filter(|evt| matches!(evt, PathEvent::Begin { .. }))
            .count();
        assert_eq!(begins, 2);
    }

    #[test]
    fn compact_numbers() {
        let evts = events("M1.5.5L-2e1.5");
        assert_eq!(
            evts[1],
            PathEvent::Line {
                from: point(1.5, 0.5),
                to: point(-20.0, 0.5),
            }
        );
    }

    #[test]
    fn missing_move_to() {
        match parse_path_data("L 10 0") {
            Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_command() {
        match parse_path_data("M 0 0 A 5 5 0 0 1 10 10") {
            Err(ParseError::Command { command: 'A', .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_number() {
        assert!(matches!(
            parse_path_data("M 0 0 L 1 foo"),
            Err(ParseError::Number { .. })
        ));
    }
}
