use std::io;

use polytrace::svg::compose::{compose_layers, ComposeOptions, LayerSource};
use polytrace::svg::document_to_svg;

use crate::commands::ResolveCmd;

/// Runs the full pipeline on one layer's path data and writes the SVG
/// document.
pub fn resolve(mut cmd: ResolveCmd) -> Result<(), io::Error> {
    let sources = [LayerSource {
        color: cmd.fill,
        path_data: cmd.input,
    }];
    let composition = compose_layers(
        &sources,
        &ComposeOptions {
            width: cmd.width,
            height: cmd.height,
            background: cmd.background,
            layer: cmd.options,
        },
    );

    if let Some(failure) = composition.failures.first() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            failure.error.to_string(),
        ));
    }
    for (_, anomaly) in &composition.anomalies {
        log::warn!("{:?}", anomaly);
    }

    cmd.output
        .write_all(document_to_svg(&composition.document).as_bytes())
}
