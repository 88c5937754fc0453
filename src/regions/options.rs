use super::label::Connectivity;
use serde::{Deserialize, Serialize};

/// Options controlling component labeling and the minimum region size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionOptions {
    /// Components with `pixels <= min_pixels` are dropped.
    pub min_pixels: usize,
    /// Neighbourhood used when grouping edge pixels.
    pub connectivity: Connectivity,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self {
            min_pixels: 5,
            connectivity: Connectivity::Four,
        }
    }
}
