//! Line segments and bézier curves.
//!
//! The flattening methods approximate a curve with a succession of line
//! segments. The tolerance threshold corresponds to the maximum distance
//! between the curve and its linear approximation: the smaller the tolerance,
//! the more precise the approximation and the more segments are generated.

use crate::math::{Point, Vector};

fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    #[inline]
    pub fn bounding_range_x(&self) -> (f32, f32) {
        min_max(self.from.x, self.to.x)
    }

    #[inline]
    pub fn bounding_range_y(&self) -> (f32, f32) {
        min_max(self.from.y, self.to.y)
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.to_vector().length()
    }

    /// Computes the intersection (if any) between this segment and another
    /// one.
    ///
    /// The result is provided in the form of the `t` parameter of each
    /// segment. To get the intersection point, sample one of the segments at
    /// the corresponding value.
    ///
    /// Only genuine transversal crossings are reported: segments that merely
    /// touch at an endpoint or are parallel (including overlapping) produce
    /// `None`.
    pub fn intersection(&self, other: &Self) -> Option<(f32, f32)> {
        let (min1, max1) = self.bounding_range_x();
        let (min2, max2) = other.bounding_range_x();
        if min1 > max2 || max1 < min2 {
            return None;
        }

        let v1 = self.to_vector().to_f64();
        let v2 = other.to_vector().to_f64();

        let v1_cross_v2 = v1.cross(v2);

        if v1_cross_v2 == 0.0 {
            // The segments are parallel
            return None;
        }

        let sign_v1_cross_v2 = v1_cross_v2.signum();
        let abs_v1_cross_v2 = f64::abs(v1_cross_v2);

        let v3 = (other.from - self.from).to_f64();

        // t and u should be divided by v1_cross_v2, but we postpone that to
        // not lose precision. We have to respect the sign of v1_cross_v2 (and
        // therefore t and u) so we apply it now and will use the absolute
        // value of v1_cross_v2 afterwards.
        let t = v3.cross(v2) * sign_v1_cross_v2;
        let u = v3.cross(v1) * sign_v1_cross_v2;

        if t <= 0.0 || t >= abs_v1_cross_v2 || u <= 0.0 || u >= abs_v1_cross_v2 {
            return None;
        }

        Some(((t / abs_v1_cross_v2) as f32, (u / abs_v1_cross_v2) as f32))
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Computes the position of the intersection between this segment and the
    /// horizontal line at the provided `y` coordinate, if any.
    pub fn horizontal_line_intersection(&self, y: f32) -> Option<Point> {
        let dy = self.to.y - self.from.y;
        if dy == 0.0 {
            return None;
        }

        let t = (y - self.from.y) / dy;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some(self.sample(t))
    }
}

// Squared distance from `p` to the line supporting the chord from..to,
// scaled by the squared chord length. Used as the flatness measure for
// recursive subdivision.
fn line_deviation_sq(from: Point, to: Point, p: Point) -> f32 {
    let chord = to - from;
    let len_sq = chord.square_length();
    if len_sq == 0.0 {
        return (p - from).square_length();
    }
    let cross = chord.cross(p - from);

    cross * cross / len_sq
}

const MAX_FLATTENING_DEPTH: u32 = 16;

/// A 2d curve segment defined by three points: the beginning of the segment,
/// a control point and the end of the segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        (self.from.to_vector() * one_t2
            + self.ctrl.to_vector() * 2.0 * one_t * t
            + self.to.to_vector() * t2)
            .to_point()
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: f32) -> (Self, Self) {
        let ctrl1 = self.from.lerp(self.ctrl, t);
        let ctrl2 = self.ctrl.lerp(self.to, t);
        let mid = ctrl1.lerp(ctrl2, t);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: ctrl1,
                to: mid,
            },
            QuadraticBezierSegment {
                from: mid,
                ctrl: ctrl2,
                to: self.to,
            },
        )
    }

    /// Conservative vertical extent of the curve, from the control polygon.
    pub fn fast_bounding_range_y(&self) -> (f32, f32) {
        let min = self.from.y.min(self.ctrl.y).min(self.to.y);
        let max = self.from.y.max(self.ctrl.y).max(self.to.y);

        (min, max)
    }

    /// Approximates the curve with a sequence of line segments, invoking the
    /// callback with the end point of each of them.
    pub fn for_each_flattened<F: FnMut(Point)>(&self, tolerance: f32, callback: &mut F) {
        self.flattened_recursive(tolerance * tolerance, 0, callback);
        callback(self.to);
    }

    fn flattened_recursive<F: FnMut(Point)>(&self, tolerance_sq: f32, depth: u32, callback: &mut F) {
        if depth >= MAX_FLATTENING_DEPTH
            || line_deviation_sq(self.from, self.to, self.ctrl) <= tolerance_sq
        {
            return;
        }

        let (first, second) = self.split(0.5);
        first.flattened_recursive(tolerance_sq, depth + 1, callback);
        callback(first.to);
        second.flattened_recursive(tolerance_sq, depth + 1, callback);
    }
}

/// A 2d curve segment defined by four points: the beginning of the segment,
/// two control points and the end of the segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        (self.from.to_vector() * one_t3
            + self.ctrl1.to_vector() * 3.0 * one_t2 * t
            + self.ctrl2.to_vector() * 3.0 * one_t * t2
            + self.to.to_vector() * t3)
            .to_point()
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: f32) -> (Self, Self) {
        let ctrl1a = self.from.lerp(self.ctrl1, t);
        let ctrl2a = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl3a = self.ctrl2.lerp(self.to, t);
        let ctrl1aa = ctrl1a.lerp(ctrl2a, t);
        let ctrl2aa = ctrl2a.lerp(ctrl3a, t);
        let mid = ctrl1aa.lerp(ctrl2aa, t);

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: mid,
            },
            CubicBezierSegment {
                from: mid,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    /// Conservative vertical extent of the curve, from the control polygon.
    pub fn fast_bounding_range_y(&self) -> (f32, f32) {
        let min = self
            .from
            .y
            .min(self.ctrl1.y)
            .min(self.ctrl2.y)
            .min(self.to.y);
        let max = self
            .from
            .y
            .max(self.ctrl1.y)
            .max(self.ctrl2.y)
            .max(self.to.y);

        (min, max)
    }

    /// Approximates the curve with a sequence of line segments, invoking the
    /// callback with the end point of each of them.
    pub fn for_each_flattened<F: FnMut(Point)>(&self, tolerance: f32, callback: &mut F) {
        self.flattened_recursive(tolerance * tolerance, 0, callback);
        callback(self.to);
    }

    fn flattened_recursive<F: FnMut(Point)>(&self, tolerance_sq: f32, depth: u32, callback: &mut F) {
        let flat = line_deviation_sq(self.from, self.to, self.ctrl1) <= tolerance_sq
            && line_deviation_sq(self.from, self.to, self.ctrl2) <= tolerance_sq;
        if depth >= MAX_FLATTENING_DEPTH || flat {
            return;
        }

        let (first, second) = self.split(0.5);
        first.flattened_recursive(tolerance_sq, depth + 1, callback);
        callback(first.to);
        second.flattened_recursive(tolerance_sq, depth + 1, callback);
    }
}
