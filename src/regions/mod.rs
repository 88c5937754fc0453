//! Line support regions: per-bin connected components with a spectral fit.
//!
//! For each orientation bin the edge mask is labeled into connected
//! components. Components larger than a minimum pixel count are fitted by
//! [`SpectralFitter`] (length, orientation, contrast) and appended to a
//! [`RegionTable`] shared by both orientation schemes. Each scheme paints its
//! region ids and lengths into its own [`RegionMap`], held by a
//! [`RegionAccumulator`].
//!
//! Ids are 1-based and strictly sequential: a scheme's bins are committed in
//! processing order, and the offset scheme continues where the aligned one
//! stopped.

mod accumulator;
mod label;
mod options;
mod spectral;
mod types;

pub use accumulator::{
    bin_regions, fit_mask_regions, generate_regions, FittedRegion, RegionAccumulator,
};
pub use label::{label_components, ComponentLabels, Connectivity};
pub use options::RegionOptions;
pub use spectral::SpectralFitter;
pub use types::{BinSummary, LineRegion, RegionMap, RegionRecord, RegionShape, RegionTable};
