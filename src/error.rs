use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the LSR pipeline.
///
/// Numeric degeneracies (empty histograms, NaN features) are not errors; they
/// are resolved to zero inside the reducer.
#[derive(Debug, Error)]
pub enum LsrError {
    #[error("{name} has shape {found:?}, expected {expected:?} (rows, cols)")]
    ShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("raster buffer holds {found} samples, expected {expected}")]
    BufferSize { expected: usize, found: usize },
    #[error("region id {id} is outside the region table ({table_len} records)")]
    UnknownRegion { id: u32, table_len: usize },
    #[error("failed to read params {}: {source}", path.display())]
    ReadParams {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse params {}: {source}", path.display())]
    ParseParams {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
