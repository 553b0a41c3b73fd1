//! Serializing a document to SVG text.

use std::fmt::Write;

use crate::elements::{Document, Group, Node, PathElement};

/// Writes a document as a standalone SVG string.
pub fn document_to_svg(document: &Document) -> String {
    let mut out = String::new();
    // Infallible writes: fmt::Write on String never errors.
    let _ = write_document(&mut out, document);

    out
}

fn write_document(out: &mut String, document: &Document) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_f32(document.width),
        h = fmt_f32(document.height),
    )?;

    for node in &document.nodes {
        match node {
            Node::Rect(rect) => {
                writeln!(
                    out,
                    r#"  <rect width="{}" height="{}" fill="{}"/>"#,
                    fmt_f32(rect.width),
                    fmt_f32(rect.height),
                    rect.fill,
                )?;
            }
            Node::Path(path) => {
                out.push_str("  ");
                write_path(out, path)?;
                out.push('\n');
            }
            Node::Group(group) => write_group(out, group)?,
        }
    }

    writeln!(out, "</svg>")
}

fn write_group(out: &mut String, group: &Group) -> std::fmt::Result {
    writeln!(out, r#"  <g id="{}">"#, group.id)?;
    for path in &group.paths {
        out.push_str("    ");
        write_path(out, path)?;
        out.push('\n');
    }
    writeln!(out, "  </g>")
}

fn write_path(out: &mut String, path: &PathElement) -> std::fmt::Result {
    write!(out, r#"<path d="{}" fill="{}""#, path.d, path.fill)?;
    if path.even_odd {
        write!(out, r#" fill-rule="evenodd""#)?;
    }
    write!(out, r#" stroke="none"/>"#)
}

/// Drops the fractional part when it is zero, so integral canvas sizes
/// serialize as integers.
fn fmt_f32(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
