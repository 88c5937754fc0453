//! Edge stage: 2×2 finite-difference gradients and magnitude thresholding.
//!
//! - [`grad`] computes per-pixel derivatives, magnitude and orientation in
//!   degrees from a standardized channel.
//! - [`select`] keeps pixels whose magnitude exceeds a threshold, after
//!   folding negative orientations into `[0, 360)`.
//!
//! Borders are zero-padded: samples outside the raster read as 0.

pub mod grad;
pub mod select;

pub use grad::{compute_gradient, standardize, GradientField};
pub use select::{select_edges, EdgePixelSet};
