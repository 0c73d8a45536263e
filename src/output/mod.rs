use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::engine::{OutputConfig, SortError};
use crate::reading::TypedSequence;

/// Renders the sequence as one line: each value's native string form, joined
/// by the configured separator.
pub fn format_sequence(sequence: &TypedSequence, config: &OutputConfig) -> String {
    let mut line = sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&config.separator);
    if config.trailing_newline {
        line.push('\n');
    }
    line
}

/// Writes the formatted sequence to `path`, replacing any existing content.
pub fn write_output(
    path: impl AsRef<Path>,
    sequence: &TypedSequence,
    config: &OutputConfig,
) -> Result<(), SortError> {
    let path = path.as_ref();
    let wrap = |source| SortError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let line = format_sequence(sequence, config);
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    writer.write_all(line.as_bytes()).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    debug!(path = %path.display(), bytes = line.len(), "wrote output");
    Ok(())
}
