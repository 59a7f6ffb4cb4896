//! Error types for krant-core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors crossing the file boundaries of an intake run.
///
/// Decode problems are deliberately absent: input bytes are decoded lossily
/// and can never fail the run.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read input file {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read player list {}", .path.display())]
    RosterRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("player list {} is not valid JSON", .path.display())]
    RosterParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode intake record as JSON")]
    Encode(#[source] serde_json::Error),
}
