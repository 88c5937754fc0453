#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extractor;
pub mod features;
pub mod raster;

// Stage-level modules, public for tools and tests.
pub mod angle;
pub mod binning;
pub mod edges;
pub mod histogram;
pub mod reconcile;
pub mod regions;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::LsrError;
pub use crate::extractor::{extract_channel_features, extract_lsr_features, LsrExtractor, LsrParams};
pub use crate::features::LsrFeatures;
pub use crate::raster::Raster;

pub use crate::edges::{compute_gradient, standardize, GradientField};

// High-level diagnostics returned by the extractor.
pub use crate::diagnostics::{LsrReport, LsrTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lsr_features::prelude::*;
///
/// # fn main() -> Result<(), LsrError> {
/// let (w, h) = (64usize, 48usize);
/// let channel = Raster::from_vec(w, h, vec![0.0; w * h])?;
///
/// let extractor = LsrExtractor::new(LsrParams::default());
/// let report = extractor.process_channel(&channel)?;
/// println!(
///     "features={:?} survivors={}",
///     report.features.to_array(),
///     report.trace.reconcile.survivors
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::raster::Raster;
    pub use crate::{LsrError, LsrExtractor, LsrFeatures, LsrParams};
}
