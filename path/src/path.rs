//! The default path data structure.

use crate::math::{Point, Transform};
use crate::PathEvent;

use std::fmt;

/// Enumeration corresponding to the [PathEvent](enum.PathEvent.html) enum
/// without the parameters.
///
/// This is used by the [Path](struct.Path.html) data structure to store path
/// events a tad more efficiently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) enum Verb {
    LineTo,
    QuadraticTo,
    CubicTo,
    Begin,
    Close,
    End,
}

/// A simple path data structure.
///
/// Paths contain two buffers: one of commands (Begin, Line, Quadratic, Cubic,
/// Close or End), and one of points. The order of storage for points is
/// determined by the sequence of commands.
///
/// It can be created using a [Builder](struct.Builder.html), and can be
/// iterated over.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Box<[Point]>,
    verbs: Box<[Verb]>,
}

impl Path {
    /// Creates a [Builder](struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            points: Box::new([]),
            verbs: Box::new([]),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterates over the entire `Path`.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points[..], &self.verbs[..])
    }

    /// The position of the first `Begin` command, if any.
    ///
    /// When the path holds a single sub-path this is its representative
    /// point for containment and parity tests.
    pub fn first_endpoint(&self) -> Option<Point> {
        match self.verbs.first() {
            Some(Verb::Begin) => Some(self.points[0]),
            _ => None,
        }
    }

    /// Returns a path with all points transformed.
    pub fn transformed(&self, transform: &Transform) -> Self {
        let mut result = self.clone();
        for point in result.points.iter_mut() {
            *point = transform.transform_point(*point);
        }

        result
    }

    /// Concatenates two paths.
    pub fn merge(&self, other: &Self) -> Self {
        let mut verbs = Vec::with_capacity(self.verbs.len() + other.verbs.len());
        let mut points = Vec::with_capacity(self.points.len() + other.points.len());
        verbs.extend_from_slice(&self.verbs);
        verbs.extend_from_slice(&other.verbs);
        points.extend_from_slice(&self.points);
        points.extend_from_slice(&other.points);

        Path {
            verbs: verbs.into_boxed_slice(),
            points: points.into_boxed_slice(),
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Path {{ {} }}", crate::serializer::path_to_svg(self))
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// Builds path objects.
#[derive(Default)]
pub struct Builder {
    points: Vec<Point>,
    verbs: Vec<Verb>,
    first: Point,
    in_subpath: bool,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    pub fn with_capacity(points: usize, edges: usize) -> Self {
        Builder {
            points: Vec::with_capacity(points),
            verbs: Vec::with_capacity(edges),
            first: Point::zero(),
            in_subpath: false,
        }
    }

    /// Starts a new sub-path at the given position.
    ///
    /// Ends the current sub-path without closing it, if any.
    pub fn begin(&mut self, at: Point) {
        if self.in_subpath {
            self.end(false);
        }
        self.in_subpath = true;
        self.first = at;
        self.points.push(at);
        self.verbs.push(Verb::Begin);
    }

    /// Ends the current sub-path, optionally closing it.
    pub fn end(&mut self, close: bool) {
        debug_assert!(self.in_subpath);
        self.in_subpath = false;
        self.verbs.push(if close { Verb::Close } else { Verb::End });
    }

    /// Closes the current sub-path. Shorthand for `end(true)`.
    pub fn close(&mut self) {
        self.end(true);
    }

    pub fn line_to(&mut self, to: Point) {
        debug_assert!(self.in_subpath);
        self.points.push(to);
        self.verbs.push(Verb::LineTo);
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        debug_assert!(self.in_subpath);
        self.points.push(ctrl);
        self.points.push(to);
        self.verbs.push(Verb::QuadraticTo);
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        debug_assert!(self.in_subpath);
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self.verbs.push(Verb::CubicTo);
    }

    /// The position the builder is currently at, if inside a sub-path.
    pub fn current_position(&self) -> Option<Point> {
        if !self.in_subpath {
            return None;
        }

        self.points.last().copied()
    }

    pub fn build(mut self) -> Path {
        if self.in_subpath {
            self.end(false);
        }

        Path {
            points: self.points.into_boxed_slice(),
            verbs: self.verbs.into_boxed_slice(),
        }
    }
}

/// An iterator of the `Path`'s events.
#[derive(Clone)]
pub struct Iter<'l> {
    points: std::slice::Iter<'l, Point>,
    verbs: std::slice::Iter<'l, Verb>,
    current: Point,
    first: Point,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points: points.iter(),
            verbs: verbs.iter(),
            current: Point::zero(),
            first: Point::zero(),
        }
    }

    #[inline]
    fn next_point(&mut self) -> Point {
        self.points.next().copied().unwrap_or_else(Point::zero)
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(&Verb::Begin) => {
                self.current = self.next_point();
                self.first = self.current;
                Some(PathEvent::Begin { at: self.current })
            }
            Some(&Verb::LineTo) => {
                let from = self.current;
                self.current = self.next_point();
                Some(PathEvent::Line {
                    from,
                    to: self.current,
                })
            }
            Some(&Verb::QuadraticTo) => {
                let from = self.current;
                let ctrl = self.next_point();
                self.current = self.next_point();
                Some(PathEvent::Quadratic {
                    from,
                    ctrl,
                    to: self.current,
                })
            }
            Some(&Verb::CubicTo) => {
                let from = self.current;
                let ctrl1 = self.next_point();
                let ctrl2 = self.next_point();
                self.current = self.next_point();
                Some(PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to: self.current,
                })
            }
            Some(&Verb::Close) => {
                let last = self.current;
                self.current = self.first;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: true,
                })
            }
            Some(&Verb::End) => {
                let last = self.current;
                self.current = self.first;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: false,
                })
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn simple_path() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(1.0, 0.0));
        builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
        builder.cubic_bezier_to(point(2.0, 2.0), point(1.0, 2.0), point(0.0, 2.0));
        builder.close();
        let path = builder.build();

        let mut it = path.iter();
        assert_eq!(it.next(), Some(PathEvent::Begin { at: point(0.0, 0.0) }));
        assert_eq!(
            it.next(),
            Some(PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(1.0, 0.0),
            })
        );
        assert_eq!(
            it.next(),
            Some(PathEvent::Quadratic {
                from: point(1.0, 0.0),
                ctrl: point(2.0, 0.0),
                to: point(2.0, 1.0),
            })
        );
        assert_eq!(
            it.next(),
            Some(PathEvent::Cubic {
                from: point(2.0, 1.0),
                ctrl1: point(2.0, 2.0),
                ctrl2: point(1.0, 2.0),
                to: point(0.0, 2.0),
            })
        );
        assert_eq!(
            it.next(),
            Some(PathEvent::End {
                last: point(0.0, 2.0),
                first: point(0.0, 0.0),
                close: true,
            })
        );
        assert_eq!(it.next(), None);

        assert_eq!(path.first_endpoint(), Some(point(0.0, 0.0)));
    }

    #[test]
    fn merge_paths() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(1.0, 0.0));
        builder.close();
        let a = builder.build();

        let mut builder = Path::builder();
        builder.begin(point(5.0, 5.0));
        builder.line_to(point(6.0, 5.0));
        builder.close();
        let b = builder.build();

        let merged = a.merge(&b);
        let begins: Vec<_> = merged
            .iter()
            .filter(|evt| matches!(evt, PathEvent::Begin { .. }))
            .collect();
        assert_eq!(begins.len(), 2);
        assert_eq!(merged.first_endpoint(), Some(point(0.0, 0.0)));
    }

    #[test]
    fn unclosed_subpath_ends() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(1.0, 1.0));
        let path = builder.build();

        let last = path.iter().last().unwrap();
        assert_eq!(
            last,
            PathEvent::End {
                last: point(1.0, 1.0),
                first: point(0.0, 0.0),
                close: false,
            }
        );
    }

    #[test]
    fn transformed_path() {
        let mut builder = Path::builder();
        builder.begin(point(1.0, 1.0));
        builder.line_to(point(2.0, 1.0));
        builder.close();
        let path = builder.build();

        let transform = Transform::scale(2.0, 2.0);
        let scaled = path.transformed(&transform);
        assert_eq!(scaled.first_endpoint(), Some(point(2.0, 2.0)));
    }
}
