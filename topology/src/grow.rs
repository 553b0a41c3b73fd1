//! Expanding host outlines about their bounding box center.
//!
//! Adjacent color layers are traced independently, so their outlines abut
//! with sub-pixel gaps that render as hairline seams. Growing each host
//! outline slightly makes neighboring regions overlap and hides the seams.
//! The expansion scales every coordinate about the center of the outline's
//! bounding box, so the outline keeps its position while getting uniformly
//! larger (or smaller, for a negative expansion).

use crate::aabb::fast_bounding_box;
use crate::math::Transform;
use crate::path::{Path, PathEvent};

/// Grows a contour by `expansion` about its bounding box center.
///
/// An expansion of `0.05` makes the contour 5% larger. `0.0` leaves the
/// geometry unchanged apart from coordinate rounding; emitted coordinates
/// are rounded to 3 decimals in all cases, matching the serializer's output
/// precision so the grown geometry and its text form agree.
pub fn grow(path: &Path, expansion: f32) -> Path {
    if path.is_empty() {
        return Path::new();
    }

    let center = fast_bounding_box(path).center();
    // Scaling about the origin moves the outline; translating it back by
    // center * expansion keeps the bounding box center fixed.
    let transform = Transform::scale(1.0 + expansion, 1.0 + expansion)
        .then_translate(-center.to_vector() * expansion);

    let transformed = path.transformed(&transform);

    let mut builder = Path::builder();
    for evt in &transformed {
        match evt {
            PathEvent::Begin { at } => {
                builder.begin(round(at));
            }
            PathEvent::Line { to, .. } => {
                builder.line_to(round(to));
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                builder.quadratic_bezier_to(round(ctrl), round(to));
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                builder.cubic_bezier_to(round(ctrl1), round(ctrl2), round(to));
            }
            PathEvent::End { close, .. } => {
                builder.end(close);
            }
        }
    }

    builder.build()
}

fn round(p: crate::math::Point) -> crate::math::Point {
    crate::math::point(round_coord(p.x), round_coord(p.y))
}

fn round_coord(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
