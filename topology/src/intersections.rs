//! Counting transversal crossings between contours.
//!
//! The parity classifier only needs crossing counts, not intersection
//! positions: both contours are flattened within a tolerance and the
//! transversal crossings of the resulting segments are counted. Endpoint
//! touching and tangencies are not crossings (see
//! [`LineSegment::intersection`](../geom/struct.LineSegment.html#method.intersection)),
//! which is what an even-odd parity test requires.

use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use crate::path::{Path, PathEvent};

/// Approximates a path with line segments, closing every subpath.
pub(crate) fn flatten_path(path: &Path, tolerance: f32) -> Vec<LineSegment> {
    let mut segments = Vec::new();

    for evt in path {
        match evt {
            PathEvent::Begin { .. } => {}
            PathEvent::Line { from, to } => {
                segments.push(LineSegment { from, to });
            }
            PathEvent::End { last, first, .. } => {
                if last != first {
                    segments.push(LineSegment {
                        from: last,
                        to: first,
                    });
                }
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                let mut prev = from;
                QuadraticBezierSegment { from, ctrl, to }.for_each_flattened(tolerance, &mut |p| {
                    segments.push(LineSegment { from: prev, to: p });
                    prev = p;
                });
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let mut prev = from;
                CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                }
                .for_each_flattened(tolerance, &mut |p| {
                    segments.push(LineSegment { from: prev, to: p });
                    prev = p;
                });
            }
        }
    }

    segments
}

/// Counts the transversal crossings between two paths.
///
/// The count is symmetric. It is not exact to sub-pixel precision (curves are
/// flattened within `tolerance` first), which is sufficient to determine
/// crossing parity.
pub fn count_path_intersections(a: &Path, b: &Path, tolerance: f32) -> usize {
    let b_segments = flatten_path(b, tolerance);
    let mut count = 0;
    for a_segment in flatten_path(a, tolerance) {
        for b_segment in &b_segments {
            if a_segment.intersects(b_segment) {
                count += 1;
            }
        }
    }

    count
}

/// Counts the transversal crossings between a probe segment and a path.
pub fn count_segment_path_intersections(probe: &LineSegment, path: &Path, tolerance: f32) -> usize {
    let mut count = 0;
    for segment in flatten_path(path, tolerance) {
        if probe.intersects(&segment) {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point;
    use crate::path::parse_path_data;

    #[test]
    fn crossing_squares() {
        // Two axis-aligned squares overlapping in one corner: the outlines
        // cross exactly twice.
        let a = parse_path_data("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
        let b = parse_path_data("M 5 5 L 15 5 L 15 15 L 5 15 Z").unwrap();

        assert_eq!(count_path_intersections(&a, &b, 0.1), 2);
        assert_eq!(count_path_intersections(&b, &a, 0.1), 2);
    }

    #[test]
    fn disjoint_squares() {
        let a = parse_path_data("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
        let b = parse_path_data("M 20 20 L 30 20 L 30 30 L 20 30 Z").unwrap();

        assert_eq!(count_path_intersections(&a, &b, 0.1), 0);
    }

    #[test]
    fn probe_through_square() {
        let square = parse_path_data("M 5 5 L 15 5 L 15 15 L 5 15 Z").unwrap();

        // From outside through the whole square: two crossings.
        let through = LineSegment {
            from: point(0.0, 10.0),
            to: point(20.0, 10.0),
        };
        assert_eq!(count_segment_path_intersections(&through, &square, 0.1), 2);

        // From outside to the center: one crossing.
        let into = LineSegment {
            from: point(0.0, 10.0),
            to: point(10.0, 10.0),
        };
        assert_eq!(count_segment_path_intersections(&into, &square, 0.1), 1);
    }

    #[test]
    fn flatten_closes_unclosed_subpath() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(1.0, 0.0));
        builder.line_to(point(1.0, 1.0));
        let path = builder.build();

        // Two explicit edges plus the implicit closing edge.
        assert_eq!(flatten_path(&path, 0.1).len(), 3);
    }
}
