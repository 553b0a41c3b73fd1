//! Determine whether a point is inside a path.

use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use crate::math::Point;
use crate::path::{FillRule, PathEvent};

/// Returns whether the point is inside the path.
pub fn hit_test_path<Iter>(point: &Point, path: Iter, fill_rule: FillRule, tolerance: f32) -> bool
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let winding = path_winding_number_at_position(point, path, tolerance);

    fill_rule.is_in(winding)
}

/// Compute the winding number of a given position with respect to the path.
pub fn path_winding_number_at_position<Iter>(point: &Point, path: Iter, tolerance: f32) -> i32
where
    Iter: IntoIterator<Item = PathEvent>,
{
    // Loop over the edges and compute the winding number at that point by
    // accumulating the winding of all edges intersecting the horizontal line
    // passing through our point which are left of it.
    let mut winding = 0;

    for evt in path {
        match evt {
            PathEvent::Begin { .. } => {}
            PathEvent::Line { from, to } => {
                test_segment(*point, &LineSegment { from, to }, &mut winding);
            }
            PathEvent::End { last, first, .. } => {
                test_segment(
                    *point,
                    &LineSegment {
                        from: last,
                        to: first,
                    },
                    &mut winding,
                );
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                let segment = QuadraticBezierSegment { from, ctrl, to };
                let (min, max) = segment.fast_bounding_range_y();
                if min > point.y || max < point.y {
                    continue;
                }
                let mut prev = segment.from;
                segment.for_each_flattened(tolerance, &mut |p| {
                    test_segment(*point, &LineSegment { from: prev, to: p }, &mut winding);
                    prev = p;
                });
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let segment = CubicBezierSegment {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                };
                let (min, max) = segment.fast_bounding_range_y();
                if min > point.y || max < point.y {
                    continue;
                }
                let mut prev = segment.from;
                segment.for_each_flattened(tolerance, &mut |p| {
                    test_segment(*point, &LineSegment { from: prev, to: p }, &mut winding);
                    prev = p;
                });
            }
        }
    }

    winding
}

fn test_segment(point: Point, segment: &LineSegment, winding: &mut i32) {
    // Half-open interval: an edge covers its min-y endpoint but not its
    // max-y endpoint, so a scanline through a vertex shared by two edges
    // counts exactly one of them.
    let (min_y, max_y) = segment.bounding_range_y();
    if min_y > point.y || max_y <= point.y {
        return;
    }

    if let Some(pos) = segment.horizontal_line_intersection(point.y) {
        if pos.x < point.x {
            if segment.to.y > segment.from.y {
                *winding += 1;
            } else if segment.to.y < segment.from.y {
                *winding -= 1;
            }
        }
    }
}

#[test]
fn test_hit_test() {
    use crate::math::point;
    use crate::path::Path;

    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    builder.line_to(point(0.0, 1.0));
    builder.close();
    builder.begin(point(0.25, 0.25));
    builder.line_to(point(0.75, 0.25));
    builder.line_to(point(0.75, 0.75));
    builder.line_to(point(0.25, 0.75));
    builder.close();
    let path = builder.build();

    assert!(!hit_test_path(&point(-1.0, 0.5), &path, FillRule::EvenOdd, 0.1));
    assert!(!hit_test_path(&point(2.0, 0.5), &path, FillRule::EvenOdd, 0.1));
    assert!(!hit_test_path(&point(0.5, -1.0), &path, FillRule::EvenOdd, 0.1));
    assert!(!hit_test_path(&point(0.5, 2.0), &path, FillRule::EvenOdd, 0.1));

    // Inside the hole.
    assert!(!hit_test_path(&point(0.5, 0.5), &path, FillRule::EvenOdd, 0.1));
    assert!(hit_test_path(&point(0.5, 0.5), &path, FillRule::NonZero, 0.1));
    // Between the outer contour and the hole.
    assert!(hit_test_path(&point(0.2, 0.5), &path, FillRule::EvenOdd, 0.1));
    assert!(hit_test_path(&point(0.8, 0.5), &path, FillRule::EvenOdd, 0.1));
}

#[test]
fn vertex_on_scanline() {
    use crate::math::point;
    use crate::path::Path;

    // A triangle whose rightmost vertex sits exactly on the query points'
    // scanline. The two edges meeting there must contribute a single
    // crossing, not two.
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 5.0));
    builder.line_to(point(0.0, 10.0));
    builder.close();
    let path = builder.build();

    // Clearly outside, to the right of the vertex.
    assert!(!hit_test_path(&point(20.0, 5.0), &path, FillRule::NonZero, 0.1));
    assert!(!hit_test_path(&point(11.0, 5.0), &path, FillRule::EvenOdd, 0.1));
    // Clearly inside, on the same scanline.
    assert!(hit_test_path(&point(2.0, 5.0), &path, FillRule::NonZero, 0.1));
    assert!(hit_test_path(&point(2.0, 5.0), &path, FillRule::EvenOdd, 0.1));
}

#[test]
fn convex_contour_contains_centroid() {
    use crate::math::{point, vector};
    use crate::path::Path;

    // A convex pentagon; the average of its vertices lies inside.
    let vertices = [
        point(0.0, 0.0),
        point(4.0, -1.0),
        point(6.0, 2.0),
        point(3.0, 5.0),
        point(-1.0, 3.0),
    ];

    let mut builder = Path::builder();
    builder.begin(vertices[0]);
    for v in &vertices[1..] {
        builder.line_to(*v);
    }
    builder.close();
    let path = builder.build();

    let mut centroid = vector(0.0, 0.0);
    for v in &vertices {
        centroid += v.to_vector();
    }
    let centroid = (centroid / vertices.len() as f32).to_point();

    assert!(hit_test_path(&centroid, &path, FillRule::EvenOdd, 0.1));
    assert!(hit_test_path(&centroid, &path, FillRule::NonZero, 0.1));
}
