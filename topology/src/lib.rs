#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! The contour topology resolver.
//!
//! A raster-to-vector tracer converts one color's binary mask into a single
//! composite path with no structure: solid contours and the holes punched
//! into them arrive interleaved in one path data string. This crate
//! determines that structure and turns the raw contours into correctly
//! filled regions:
//!
//! 1. [`split`](split/index.html) separates the composite path into
//!    independent closed subpaths,
//! 2. [`classify`](classify/index.html) labels each subpath as a solid fill
//!    (host) or a hole using even-odd crossing parity,
//! 3. [`resolve`](resolve/index.html) pairs each hole with the host contour
//!    enclosing it and merges them into regions,
//! 4. [`grow`](grow/index.html) expands the host outlines to close the
//!    sub-pixel seams the tracer leaves between adjacent color layers.
//!
//! [`layer::build_layer`](layer/fn.build_layer.html) drives the whole
//! pipeline for one color layer.
//!
//! The resolver assumes the two-level structure a traced binary mask
//! produces: hosts and the holes inside them, never deeper nesting.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate polytrace_path as path;

pub mod aabb;
pub mod classify;
pub mod grow;
pub mod hit_test;
pub mod intersections;
pub mod layer;
pub mod resolve;
pub mod split;

pub use crate::path::geom;
pub use crate::path::math;

#[doc(inline)]
pub use crate::classify::Classification;
#[doc(inline)]
pub use crate::layer::{build_layer, Layer, LayerError, LayerOptions};
#[doc(inline)]
pub use crate::resolve::{Anomaly, Region, Resolution};
