//! LSR feature extraction end-to-end.
//!
//! Overview
//! - Folds orientations into `[0, 360)` and keeps pixels above the
//!   magnitude threshold.
//! - Splits them into the aligned and offset orientation schemes; each
//!   nonempty bin is labeled into components and every large-enough
//!   component is fitted spectrally.
//! - Reconciles the two schemes' region maps pixel by pixel and reduces the
//!   survivors to three descriptors.
//!
//! Modules
//! - [`params`] – configuration knobs.
//! - `pipeline` – the [`LsrExtractor`] implementation and free-function
//!   entry points.

pub mod params;
mod pipeline;

pub use params::LsrParams;
pub use pipeline::{extract_channel_features, extract_lsr_features, LsrExtractor};
