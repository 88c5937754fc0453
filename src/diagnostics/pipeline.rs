use crate::binning::OrientationScheme;
use crate::diagnostics::TimingBreakdown;
use crate::features::LsrFeatures;
use crate::reconcile::VoteSummary;
use crate::regions::{BinSummary, LineRegion};
use serde::Serialize;

/// Result produced by [`LsrExtractor::process_with_diagnostics`](crate::LsrExtractor).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LsrReport {
    pub features: LsrFeatures,
    pub trace: LsrTrace,
}

/// Stage-by-stage trace of one channel.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LsrTrace {
    pub input: InputDescriptor,
    pub edge_pixels: usize,
    pub schemes: Vec<SchemeStage>,
    pub reconcile: ReconcileStage,
    /// Surviving regions, or the single sentinel row.
    pub regions: Vec<LineRegion>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeStage {
    pub scheme: OrientationScheme,
    pub bins: Vec<BinSummary>,
    pub regions: usize,
    pub assigned_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileStage {
    pub candidates: usize,
    pub survivors: usize,
    pub sentinel: bool,
    pub votes: VoteSummary,
}
