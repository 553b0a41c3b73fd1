//! Batch composition of color layers into one document.

use crate::color::Color;
use crate::elements::{Document, Node, Rect};
use crate::emit::emit_layer;
use crate::topology::layer::{build_layer, LayerError, LayerOptions};
use crate::topology::resolve::Anomaly;

use log::warn;
use rayon::prelude::*;

/// One color layer's input: the traced path data and its quantized color.
#[derive(Clone, Debug)]
pub struct LayerSource {
    pub color: Color,
    pub path_data: String,
}

#[derive(Clone, Debug)]
pub struct ComposeOptions {
    /// Canvas size of the source image, in pixels.
    pub width: f32,
    pub height: f32,
    /// The quantizer's background cluster color, if any. Emitted as a rect
    /// covering the whole canvas, below every layer.
    pub background: Option<Color>,
    pub layer: LayerOptions,
}

/// A layer the pipeline had to skip.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerFailure {
    pub layer: usize,
    pub error: LayerError,
}

/// The outcome of composing a batch: the merged document plus everything
/// that went wrong along the way.
#[derive(Clone, Debug)]
pub struct Composition {
    pub document: Document,
    /// Layers that produced no output at all, with the reason.
    pub failures: Vec<LayerFailure>,
    /// Topology anomalies of layers that did produce output, tagged with
    /// the layer index.
    pub anomalies: Vec<(usize, Anomaly)>,
}

/// Resolves and emits every layer, merging the results into one document.
///
/// Layers are processed in parallel and merged back in input order, bottom
/// layer first, so the output is deterministic. Layers are independent: a
/// malformed layer is recorded in [`Composition::failures`] and skipped, it
/// never aborts its siblings.
pub fn compose_layers(sources: &[LayerSource], options: &ComposeOptions) -> Composition {
    let results: Vec<_> = sources
        .par_iter()
        .enumerate()
        .map(|(index, source)| build_layer(index, &source.path_data, &options.layer))
        .collect();

    let mut document = Document::new(options.width, options.height);
    if let Some(background) = options.background {
        document.nodes.push(Node::Rect(Rect {
            width: options.width,
            height: options.height,
            fill: background,
        }));
    }

    let mut failures = Vec::new();
    let mut anomalies = Vec::new();

    for (index, (result, source)) in results.into_iter().zip(sources).enumerate() {
        match result {
            Ok(layer) => {
                anomalies.extend(
                    layer
                        .anomalies
                        .iter()
                        .cloned()
                        .map(|anomaly| (index, anomaly)),
                );
                if let Some(node) = emit_layer(&layer, source.color) {
                    document.nodes.push(node);
                }
            }
            Err(error) => {
                warn!("skipping layer {}: {}", index, error);
                failures.push(LayerFailure {
                    layer: index,
                    error,
                });
            }
        }
    }

    Composition {
        document,
        failures,
        anomalies,
    }
}

/// Merges per-layer documents into one.
///
/// The merged document takes the first document's canvas size and keeps
/// only the first background rect; the drawable nodes follow in document
/// order.
pub fn merge_documents<I>(documents: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    let mut documents = documents.into_iter();
    let mut merged = match documents.next() {
        Some(first) => first,
        None => return Document::new(0.0, 0.0),
    };

    for document in documents {
        for node in document.nodes {
            if let Node::Rect(_) = node {
                continue;
            }
            merged.nodes.push(node);
        }
    }

    merged
}
