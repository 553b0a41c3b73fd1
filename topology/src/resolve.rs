//! Pairing holes with their enclosing host contours.
//!
//! Classification (see [`classify`](../classify/index.html)) says *what* each
//! subpath is; resolution says *where* each hole belongs. Every hole is
//! matched against the original, un-grown host contours with a
//! point-in-polygon test and merged into the region of the unique host
//! containing it. Holes are never emitted on their own: their geometry only
//! survives as part of their host's even-odd fill.

use crate::classify::Classification;
use crate::hit_test::hit_test_path;
use crate::path::{FillRule, Path};

use log::warn;

/// A host contour together with the holes merged into it.
#[derive(Clone, Debug)]
pub struct Region {
    /// Index of the host subpath within the layer.
    pub host: usize,
    /// The host contour. Original geometry out of the resolver; the layer
    /// pipeline replaces it with the grown outline.
    pub outline: Path,
    /// Indices of the hole subpaths merged into this region.
    pub hole_indices: Vec<usize>,
    /// The merged holes' contours, in merge order, un-grown.
    pub holes: Vec<Path>,
}

impl Region {
    /// Whether any hole was merged into this region.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// The complete fill geometry: the outline followed by every merged
    /// hole, to be rendered with the even-odd fill rule.
    pub fn fill_path(&self) -> Path {
        let mut fill = self.outline.clone();
        for hole in &self.holes {
            fill = fill.merge(hole);
        }

        fill
    }
}

/// A correctness warning attached to a resolved layer.
///
/// Both cases mean the traced input did not have the assumed two-level
/// host/hole structure. The resolver makes deterministic forward progress
/// (see [`resolve_holes`]) but reports what happened, so callers that need
/// strict correctness can reject the layer instead of emitting it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Anomaly {
    /// No host contour contains the hole. The hole is dropped from the
    /// output.
    OrphanWithoutHost { hole: usize },
    /// Several host contours contain the hole. The hole is merged into the
    /// lowest-index candidate.
    AmbiguousHost { hole: usize, hosts: Vec<usize> },
}

/// The outcome of resolving one layer's holes.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// One region per host subpath, in subpath order.
    pub regions: Vec<Region>,
    pub anomalies: Vec<Anomaly>,
}

/// Assigns every hole to the host containing it.
///
/// `classifications` must be the output of
/// [`classify_subpaths`](../classify/fn.classify_subpaths.html) for the same
/// `subpaths` slice. Containment is decided on the hosts' original contours,
/// not the merged or grown geometry.
///
/// Holes matching zero or several hosts are recorded as [`Anomaly`] values:
/// an orphan hole is dropped, an ambiguous hole goes to the lowest-index
/// candidate. Both cases are also logged since they silently change the
/// rendered output.
pub fn resolve_holes(
    subpaths: &[Path],
    classifications: &[Classification],
    tolerance: f32,
) -> Resolution {
    debug_assert_eq!(subpaths.len(), classifications.len());

    let mut regions: Vec<Region> = subpaths
        .iter()
        .zip(classifications.iter())
        .enumerate()
        .filter(|(_, (_, class))| class.is_host())
        .map(|(index, (subpath, _))| Region {
            host: index,
            outline: subpath.clone(),
            hole_indices: Vec::new(),
            holes: Vec::new(),
        })
        .collect();

    let mut anomalies = Vec::new();

    for (hole_index, (subpath, _)) in subpaths
        .iter()
        .zip(classifications.iter())
        .enumerate()
        .filter(|(_, (_, class))| class.is_hole())
    {
        let representative = match subpath.first_endpoint() {
            Some(p) => p,
            None => continue,
        };

        let candidates: Vec<usize> = regions
            .iter()
            .enumerate()
            .filter(|(_, region)| {
                hit_test_path(
                    &representative,
                    &subpaths[region.host],
                    FillRule::NonZero,
                    tolerance,
                )
            })
            .map(|(region_index, _)| region_index)
            .collect();

        match candidates.len() {
            1 => {
                let region = &mut regions[candidates[0]];
                region.hole_indices.push(hole_index);
                region.holes.push(subpath.clone());
            }
            0 => {
                warn!("no host contour contains hole subpath {}", hole_index);
                anomalies.push(Anomaly::OrphanWithoutHost { hole: hole_index });
            }
            _ => {
                let hosts: Vec<usize> = candidates.iter().map(|&c| regions[c].host).collect();
                warn!(
                    "hole subpath {} is contained by several hosts {:?}, \
                     merging into host {}",
                    hole_index, hosts, hosts[0]
                );
                let region = &mut regions[candidates[0]];
                region.hole_indices.push(hole_index);
                region.holes.push(subpath.clone());
                anomalies.push(Anomaly::AmbiguousHost {
                    hole: hole_index,
                    hosts,
                });
            }
        }
    }

    Resolution { regions, anomalies }
}
