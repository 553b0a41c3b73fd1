//! Splitting a composite path into its subpaths.
//!
//! The tracer produces one composite path per color layer, with every
//! contour of the layer appended to the same path data. Each contour begins
//! with its own move-to command, so the composite splits at `Begin` events.
//! The input order is preserved: subpath indices are the identifiers used by
//! the classifier and the resolver, and they determine the deterministic ids
//! of the emitted elements.

use crate::path::{Path, PathEvent};

/// Splits a path into one independently drawable `Path` per subpath.
pub fn split_subpaths(path: &Path) -> Vec<Path> {
    let mut subpaths = Vec::new();
    let mut builder = Path::builder();
    let mut in_subpath = false;

    for evt in path {
        match evt {
            PathEvent::Begin { at } => {
                builder.begin(at);
                in_subpath = true;
            }
            PathEvent::Line { to, .. } => {
                builder.line_to(to);
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                builder.quadratic_bezier_to(ctrl, to);
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                builder.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            PathEvent::End { close, .. } => {
                builder.end(close);
                subpaths.push(std::mem::replace(&mut builder, Path::builder()).build());
                in_subpath = false;
            }
        }
    }

    if in_subpath {
        subpaths.push(builder.build());
    }

    subpaths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{parse_path_data, path_to_svg};

    #[test]
    fn three_subpaths() {
        let composite =
            parse_path_data("M 0 0 L 10 0 L 10 10 Z M 20 0 L 30 0 L 30 10 Z M 2 2 L 4 2 L 4 4 Z")
                .unwrap();

        let subpaths = split_subpaths(&composite);
        assert_eq!(subpaths.len(), 3);

        // Order is preserved and every subpath starts with its own move-to.
        assert_eq!(path_to_svg(&subpaths[0]), "M 0 0 L 10 0 L 10 10 Z");
        assert_eq!(path_to_svg(&subpaths[1]), "M 20 0 L 30 0 L 30 10 Z");
        assert_eq!(path_to_svg(&subpaths[2]), "M 2 2 L 4 2 L 4 4 Z");

        for subpath in &subpaths {
            assert!(subpath.first_endpoint().is_some());
        }
    }

    #[test]
    fn single_subpath() {
        let composite = parse_path_data("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
        let subpaths = split_subpaths(&composite);
        assert_eq!(subpaths.len(), 1);
        assert_eq!(path_to_svg(&subpaths[0]), "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    }

    #[test]
    fn empty_path() {
        assert!(split_subpaths(&Path::new()).is_empty());
    }
}
