//! Error type shared by the parsing, configuration and export paths.

use std::path::PathBuf;

/// Everything that can go wrong between picking a file and drawing it.
#[derive(Debug, thiserror::Error)]
pub enum PlotterError {
    /// The CSV file (or another input) could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a record.
    #[error("malformed CSV record {record}: {source}")]
    Csv {
        record: usize,
        #[source]
        source: csv::Error,
    },

    /// The YAML configuration file did not deserialize.
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing exported traces failed.
    #[error("failed to export traces: {0}")]
    Export(#[from] csv::Error),

    /// A screenshot could not be encoded or written.
    #[error("failed to save image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, PlotterError>;
