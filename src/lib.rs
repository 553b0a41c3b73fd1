#![deny(bare_trait_objects)]

//! # Polytrace
//!
//! Multi-color image vectorization support crates.
//!
//! A quantized raster image is traced one color at a time by an external
//! raster-to-vector tracer, which produces a single composite path per color
//! with no structure. The crates re-exported here turn that raw output into
//! correctly filled regions:
//!
//! - [`path`](path/index.html): path data structure, SVG path data parsing
//!   and serialization, and the geometric segment types.
//! - [`topology`](topology/index.html): the contour topology resolver. It
//!   splits a composite path into subpaths, classifies each one as a solid
//!   fill or a hole, pairs holes with their enclosing fill, and grows the
//!   outline to close sub-pixel tracing seams.
//! - [`svg`](svg/index.html): the structured output document, the region
//!   emitter, and the multi-layer compositor.

pub extern crate polytrace_path;
pub extern crate polytrace_svg;
pub extern crate polytrace_topology;

pub use polytrace_path as path;
pub use polytrace_svg as svg;
pub use polytrace_topology as topology;

pub use polytrace_path::math;
