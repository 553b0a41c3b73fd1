//! Turning one resolved layer into document nodes.

use crate::color::Color;
use crate::elements::{Group, Node, PathElement};
use crate::path::path_to_svg;
use crate::topology::layer::Layer;

/// Emits the element for one resolved layer.
///
/// A layer whose path data held a single contour becomes a bare path
/// element. Anything richer becomes a group with the deterministic id
/// `group_{layer index}` wrapping one path element per region, so the
/// regions of a layer stay addressable in the output. Every path is filled
/// with the layer color under the even-odd rule, which makes merged hole
/// subpaths punch through their host.
///
/// A layer whose regions all resolved away (every subpath was an orphan
/// hole) emits nothing.
pub fn emit_layer(layer: &Layer, color: Color) -> Option<Node> {
    let mut paths: Vec<PathElement> = layer
        .regions
        .iter()
        .map(|region| PathElement {
            d: path_to_svg(&region.fill_path()),
            fill: color,
            even_odd: true,
        })
        .collect();

    if layer.subpath_count == 1 {
        return paths.pop().map(Node::Path);
    }

    if paths.is_empty() {
        return None;
    }

    Some(Node::Group(Group {
        id: format!("group_{}", layer.index),
        paths,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::layer::{build_layer, LayerOptions};

    fn emit(index: usize, data: &str) -> Option<Node> {
        let layer = build_layer(index, data, &LayerOptions::default()).unwrap();
        emit_layer(&layer, Color::new(255, 0, 0))
    }

    #[test]
    fn single_contour_is_a_bare_path() {
        let node = emit(0, "M 1 2 L 21 2 L 21 22 L 1 22 Z").unwrap();
        match node {
            Node::Path(path) => {
                assert_eq!(path.d, "M 1 2 L 21 2 L 21 22 L 1 22 Z");
                assert_eq!(path.fill, Color::new(255, 0, 0));
            }
            other => panic!("expected a path element, got {:?}", other),
        }
    }

    #[test]
    fn layer_with_hole_is_a_group() {
        let node = emit(
            2,
            "M 1 2 L 21 2 L 21 22 L 1 22 Z M 8 9 L 13 9 L 13 14 L 8 14 Z",
        )
        .unwrap();
        match node {
            Node::Group(group) => {
                assert_eq!(group.id, "group_2");
                assert_eq!(group.paths.len(), 1);
                // Host data first, then the merged hole.
                assert_eq!(
                    group.paths[0].d,
                    "M 1 2 L 21 2 L 21 22 L 1 22 Z M 8 9 L 13 9 L 13 14 L 8 14 Z"
                );
                assert!(group.paths[0].even_odd);
            }
            other => panic!("expected a group element, got {:?}", other),
        }
    }

    #[test]
    fn disjoint_contours_emit_one_path_per_region() {
        let node = emit(
            0,
            "M 1 2 L 5 2 L 5 6 L 1 6 Z M 10 11 L 14 11 L 14 15 L 10 15 Z",
        )
        .unwrap();
        match node {
            Node::Group(group) => {
                assert_eq!(group.paths.len(), 2);
                assert_eq!(group.paths[0].d, "M 1 2 L 5 2 L 5 6 L 1 6 Z");
                assert_eq!(group.paths[1].d, "M 10 11 L 14 11 L 14 15 L 10 15 Z");
            }
            other => panic!("expected a group element, got {:?}", other),
        }
    }
}
