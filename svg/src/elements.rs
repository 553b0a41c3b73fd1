//! The structured element tree emitted documents are made of.
//!
//! Only the handful of element kinds the pipeline produces are modeled;
//! this is an output format, not a general SVG document model.

use crate::color::Color;

/// An SVG document: a canvas size and a flat list of top-level nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Document {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(width: f32, height: f32) -> Self {
        Document {
            width,
            height,
            nodes: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Node {
    Rect(Rect),
    Path(PathElement),
    Group(Group),
}

/// A filled rectangle anchored at the origin, used for backgrounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Rect {
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

/// A filled path. `d` holds serialized path data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathElement {
    pub d: String,
    pub fill: Color,
    /// Set when the path data contains holes that must punch through.
    pub even_odd: bool,
}

/// A group of path elements with a deterministic id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Group {
    pub id: String,
    pub paths: Vec<PathElement>,
}
