use std::io;
use std::io::Write;

use polytrace::path::parse_path_data;
use polytrace::topology::classify::classify_subpaths;
use polytrace::topology::split::split_subpaths;

use crate::commands::ClassifyCmd;

/// Prints the host/hole classification of each subpath.
pub fn classify(mut cmd: ClassifyCmd) -> Result<(), io::Error> {
    let composite = parse_path_data(&cmd.input)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let subpaths = split_subpaths(&composite);
    for (index, class) in classify_subpaths(&subpaths, cmd.tolerance)
        .iter()
        .enumerate()
    {
        writeln!(cmd.output, "{}: {:?}", index, class)?;
    }

    Ok(())
}
