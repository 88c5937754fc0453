//! Parameters for the LSR extractor.
//!
//! Defaults reproduce the reference descriptor: magnitude threshold 0.5,
//! regions of more than 5 pixels, 4-connected components and distinct
//! record indexing during reconciliation.

use crate::reconcile::VoteIndexing;
use crate::regions::{Connectivity, RegionOptions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LsrParams {
    /// Edge pixels need a gradient magnitude strictly above this value.
    pub magnitude_threshold: f64,
    /// Components with this many pixels or fewer are not regions.
    pub min_region_pixels: usize,
    /// Neighbourhood used for connected-component labeling.
    pub connectivity: Connectivity,
    /// Record indexing used by the reconciliation vote.
    pub vote_indexing: VoteIndexing,
    /// Handle numeric degeneracies (zero PMF totals, NaN features, flat
    /// channels) silently instead of logging a warning.
    pub ignore_numeric_warnings: bool,
}

impl Default for LsrParams {
    fn default() -> Self {
        Self {
            magnitude_threshold: 0.5,
            min_region_pixels: 5,
            connectivity: Connectivity::Four,
            vote_indexing: VoteIndexing::Distinct,
            ignore_numeric_warnings: true,
        }
    }
}

impl LsrParams {
    pub fn region_options(&self) -> RegionOptions {
        RegionOptions {
            min_pixels: self.min_region_pixels,
            connectivity: self.connectivity,
        }
    }
}
