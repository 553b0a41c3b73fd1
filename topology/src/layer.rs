//! The per-layer pipeline: parse, split, classify, resolve, grow.

use crate::classify::classify_subpaths;
use crate::grow::grow;
use crate::path::parser::ParseError;
use crate::path::parse_path_data;
use crate::resolve::{resolve_holes, Anomaly, Region};
use crate::split::split_subpaths;

use log::debug;

/// Tuning knobs for [`build_layer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerOptions {
    /// How much to grow each host outline, as a fraction of its size.
    /// `0.05` grows outlines by 5%. The default leaves outlines untouched.
    pub expansion: f32,
    /// Curve flattening tolerance used by the crossing and containment
    /// tests. Smaller is more precise and slower.
    pub tolerance: f32,
}

impl Default for LayerOptions {
    fn default() -> Self {
        LayerOptions {
            expansion: 0.0,
            tolerance: 0.1,
        }
    }
}

/// An error that invalidates a whole layer.
///
/// Layers are independent, so one failing layer never aborts the others;
/// batch drivers collect these per layer.
///
/// An empty or whitespace-only description is not a parse failure: it
/// parses to zero subpaths and is reported as [`EmptyPath`], while
/// descriptions that cannot be parsed at all (including ones starting with
/// something other than a move-to command) are [`MalformedPath`].
///
/// [`EmptyPath`]: #variant.EmptyPath
/// [`MalformedPath`]: #variant.MalformedPath
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayerError {
    #[error("malformed path data: {0}")]
    MalformedPath(#[from] ParseError),
    #[error("path data contains no drawable subpath")]
    EmptyPath,
}

/// One color layer with its topology resolved.
#[derive(Clone, Debug)]
pub struct Layer {
    /// Position of the layer in the input batch. Emitted element ids are
    /// derived from it.
    pub index: usize,
    /// Number of subpaths found in the layer's path data.
    pub subpath_count: usize,
    /// The resolved regions, hosts in input order, outlines grown.
    pub regions: Vec<Region>,
    pub anomalies: Vec<Anomaly>,
}

/// Resolves the topology of one color layer's path data.
///
/// Runs the full pipeline: parses `path_data`, splits it into subpaths,
/// classifies them, pairs holes with hosts and grows the host outlines by
/// `options.expansion`. Hole geometry is never grown, only outlines are.
///
/// Fails with [`LayerError::MalformedPath`] on invalid path data and
/// [`LayerError::EmptyPath`] when the data contains no subpath at all.
/// Topology anomalies do not fail the layer; they are returned on it.
pub fn build_layer(
    index: usize,
    path_data: &str,
    options: &LayerOptions,
) -> Result<Layer, LayerError> {
    let composite = parse_path_data(path_data)?;
    let subpaths = split_subpaths(&composite);
    if subpaths.is_empty() {
        return Err(LayerError::EmptyPath);
    }

    let classifications = classify_subpaths(&subpaths, options.tolerance);
    let mut resolution = resolve_holes(&subpaths, &classifications, options.tolerance);

    for region in &mut resolution.regions {
        region.outline = grow(&region.outline, options.expansion);
    }

    debug!(
        "layer {}: {} subpaths, {} regions, {} anomalies",
        index,
        subpaths.len(),
        resolution.regions.len(),
        resolution.anomalies.len(),
    );

    Ok(Layer {
        index,
        subpath_count: subpaths.len(),
        regions: resolution.regions,
        anomalies: resolution.anomalies,
    })
}
