#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures to store, build, parse and serialize 2D vector paths.
//!
//! The input of the vectorization pipeline is SVG path data produced by a
//! raster-to-vector tracer, and its output is SVG path data again. This crate
//! provides what sits between the two textual forms:
//!
//! - [`Path`](path/struct.Path.html), a compact verbs + points storage that
//!   can be built with a validating [`Builder`](path/struct.Builder.html) and
//!   iterated over as [`PathEvent`](enum.PathEvent.html)s,
//! - the [`parser`](parser/index.html) module converting SVG path data into
//!   a `Path`,
//! - the [`serializer`](serializer/index.html) module converting a `Path`
//!   back into compact path data,
//! - the [`geom`](geom/index.html) module with the segment types used by the
//!   topology algorithms (line segments and bézier curves with
//!   tolerance-driven flattening).

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate euclid;

pub mod geom;
mod events;
pub mod parser;
pub mod path;
pub mod serializer;

pub use crate::events::PathEvent;
#[doc(inline)]
pub use crate::parser::{parse_path_data, ParseError};
#[doc(inline)]
pub use crate::path::{Builder, Path};
#[doc(inline)]
pub use crate::serializer::path_to_svg;

/// f32 geometric types, aliases over euclid's default unit.
pub mod math {
    /// Alias for `euclid::default::Point2D<f32>`.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for `euclid::default::Vector2D<f32>`.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for `euclid::default::Box2D<f32>`.
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Alias for `euclid::default::Size2D<f32>`.
    pub type Size = euclid::default::Size2D<f32>;

    /// Alias for `euclid::default::Transform2D<f32>`.
    pub type Transform = euclid::default::Transform2D<f32>;

    /// Shorthand for `Point::new`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }
}

/// The fill rule defines how to determine what is inside and what is outside
/// of a shape.
///
/// See the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    #[inline]
    pub fn is_in(&self, winding_number: i32) -> bool {
        match *self {
            FillRule::EvenOdd => winding_number % 2 != 0,
            FillRule::NonZero => winding_number != 0,
        }
    }
}
