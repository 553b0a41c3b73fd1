//! Host/hole classification of subpaths by crossing parity.

use crate::geom::LineSegment;
use crate::intersections::count_segment_path_intersections;
use crate::math::point;
use crate::path::Path;

/// The role of a subpath within its layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Classification {
    /// The subpath is a solid fill area.
    Host,
    /// The subpath punches an unfilled area out of a host.
    Hole,
}

impl Classification {
    #[inline]
    pub fn is_host(self) -> bool {
        self == Classification::Host
    }

    #[inline]
    pub fn is_hole(self) -> bool {
        self == Classification::Hole
    }
}

/// Classifies every subpath of a layer as a host or a hole.
///
/// A probe segment is drawn from the origin to the subpath's first point and
/// its crossings with every *other* subpath of the layer are counted: a point
/// inside an odd number of sibling contours is inside a solid area, so its
/// contour bounds a hole. Contours traced from a binary mask alternate
/// solid/hole with nesting depth, which makes this parity test correct for
/// the two-level structure the resolver assumes.
///
/// A layer with a single subpath trivially classifies as a host: there is
/// nothing to cross.
pub fn classify_subpaths(subpaths: &[Path], tolerance: f32) -> Vec<Classification> {
    let mut classifications = Vec::with_capacity(subpaths.len());

    for (index, subpath) in subpaths.iter().enumerate() {
        let representative = match subpath.first_endpoint() {
            Some(p) => p,
            // An empty subpath crosses nothing.
            None => {
                classifications.push(Classification::Host);
                continue;
            }
        };

        let probe = LineSegment {
            from: point(0.0, 0.0),
            to: representative,
        };

        let mut crossings = 0;
        for (other_index, other) in subpaths.iter().enumerate() {
            if other_index == index {
                continue;
            }
            crossings += count_segment_path_intersections(&probe, other, tolerance);
        }

        classifications.push(if crossings % 2 == 0 {
            Classification::Host
        } else {
            Classification::Hole
        });
    }

    classifications
}
