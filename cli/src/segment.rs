use std::io;
use std::io::Write;

use polytrace::path::{parse_path_data, path_to_svg};
use polytrace::topology::split::split_subpaths;

use crate::commands::SegmentCmd;

/// Lists the subpaths of a composite path, one per line.
pub fn segment(mut cmd: SegmentCmd) -> Result<(), io::Error> {
    let composite = parse_path_data(&cmd.input)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    for (index, subpath) in split_subpaths(&composite).iter().enumerate() {
        writeln!(cmd.output, "{}: {}", index, path_to_svg(subpath))?;
    }

    Ok(())
}
