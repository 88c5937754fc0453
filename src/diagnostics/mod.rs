//! Diagnostics returned by [`LsrExtractor::process_with_diagnostics`](crate::LsrExtractor).
//!
//! `LsrReport` bundles the feature vector with an `LsrTrace` describing what
//! each stage saw: edge count, per-bin component and region counts for both
//! orientation schemes, the reconciliation vote, the surviving regions and
//! stage timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, LsrReport, LsrTrace, ReconcileStage, SchemeStage};
pub use timing::{Stage, StageTiming, TimingBreakdown};
