#![deny(bare_trait_objects)]

//! SVG document assembly on top of the topology resolver.
//!
//! [`emit`](emit/index.html) turns one resolved layer into structured
//! [`elements`](elements/index.html), [`compose`](compose/index.html) runs
//! whole batches of layers in parallel and merges the per-layer documents,
//! and [`writer`](writer/index.html) serializes the final document to SVG
//! text.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate polytrace_path as path;
pub extern crate polytrace_topology as topology;

pub mod color;
pub mod compose;
pub mod elements;
pub mod emit;
pub mod writer;

#[doc(inline)]
pub use crate::color::Color;
#[doc(inline)]
pub use crate::compose::{
    compose_layers, merge_documents, ComposeOptions, Composition, LayerFailure, LayerSource,
};
#[doc(inline)]
pub use crate::elements::{Document, Group, Node, PathElement, Rect};
#[doc(inline)]
pub use crate::emit::emit_layer;
#[doc(inline)]
pub use crate::writer::document_to_svg;
