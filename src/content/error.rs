use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while assembling the page table. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file name {name:?} in {} is not valid UTF-8", .within.display())]
    InvalidName { name: String, within: PathBuf },

    #[error("transclusion cycle: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}
