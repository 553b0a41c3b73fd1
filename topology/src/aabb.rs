//! Bounding rectangle computation for paths.

use crate::math::{point, Box2D, Point};
use crate::path::PathEvent;

/// Computes a conservative axis-aligned rectangle that contains the path.
///
/// Control points are accounted for directly, so the result may be slightly
/// larger than the tightest rectangle containing the curves. This
/// approximation is what the outline grower and the layer pipeline use: the
/// center of a conservative box is stable enough for a uniform expansion.
pub fn fast_bounding_box<Iter>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut min = point(f32::MAX, f32::MAX);
    let mut max = point(f32::MIN, f32::MIN);
    for e in path {
        min_max(&e, &mut min, &mut max);
    }

    // Return an empty rectangle by default if there was no event in the path.
    if min == point(f32::MAX, f32::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

fn min_max(evt: &PathEvent, min: &mut Point, max: &mut Point) {
    match evt {
        PathEvent::Begin { at } => {
            *min = Point::min(*min, *at);
            *max = Point::max(*max, *at);
        }
        PathEvent::Line { to, .. } => {
            *min = Point::min(*min, *to);
            *max = Point::max(*max, *to);
        }
        PathEvent::Quadratic { ctrl, to, .. } => {
            *min = Point::min(*min, Point::min(*ctrl, *to));
            *max = Point::max(*max, Point::max(*ctrl, *to));
        }
        PathEvent::Cubic {
            ctrl1, ctrl2, to, ..
        } => {
            *min = Point::min(*min, Point::min(*ctrl1, Point::min(*ctrl2, *to)));
            *max = Point::max(*max, Point::max(*ctrl1, Point::max(*ctrl2, *to)));
        }
        PathEvent::End { .. } => {}
    }
}

#[test]
fn simple_bounding_box() {
    use crate::path::Path;

    let mut builder = Path::builder();
    builder.begin(point(-10.0, -3.0));
    builder.line_to(point(0.0, -12.0));
    builder.quadratic_bezier_to(point(3.0, 4.0), point(5.0, 3.0));
    builder.close();
    let path = builder.build();

    assert_eq!(
        fast_bounding_box(&path),
        Box2D {
            min: point(-10.0, -12.0),
            max: point(5.0, 4.0),
        },
    );
}

#[test]
fn empty_bounding_box() {
    use crate::path::Path;

    let path = Path::new();
    assert_eq!(fast_bounding_box(&path), Box2D::zero());
}
