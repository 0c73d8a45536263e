use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a sorting run. Cleaning and sorting are total, so only file
/// access can fail.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("cannot read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
