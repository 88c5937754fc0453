//! Extractor pipeline driving one channel from gradients to features.
//!
//! Typical usage:
//! ```no_run
//! use lsr_features::edges::{compute_gradient, standardize};
//! use lsr_features::raster::Raster;
//! use lsr_features::{LsrExtractor, LsrParams};
//!
//! # fn example(channel: Raster<f64>) -> Result<(), lsr_features::LsrError> {
//! let extractor = LsrExtractor::new(LsrParams::default());
//! let mut field = compute_gradient(&standardize(&channel, true));
//! let report = extractor.process_with_diagnostics(&mut field)?;
//! println!("features: {:?}", report.features.to_array());
//! # Ok(())
//! # }
//! ```
use super::params::LsrParams;
use crate::binning::OrientationScheme;
use crate::diagnostics::{
    InputDescriptor, LsrReport, LsrTrace, ReconcileStage, SchemeStage, Stage, TimingBreakdown,
};
use crate::edges::{compute_gradient, select_edges, standardize, GradientField};
use crate::error::LsrError;
use crate::features::{reduce_features, LsrFeatures};
use crate::raster::Raster;
use crate::reconcile::reconcile;
use crate::regions::{bin_regions, RegionTable};
use log::debug;

/// Line Support Region feature extractor for single channels.
#[derive(Clone, Debug, Default)]
pub struct LsrExtractor {
    params: LsrParams,
}

impl LsrExtractor {
    /// Create an extractor with the supplied parameters.
    pub fn new(params: LsrParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LsrParams {
        &self.params
    }

    /// Compute the feature vector of a gradient field. The field's
    /// orientation raster is folded into `[0, 360)` in place.
    pub fn process(&self, field: &mut GradientField) -> Result<LsrFeatures, LsrError> {
        Ok(self.process_with_diagnostics(field)?.features)
    }

    /// Run the extractor and return both the features and a stage trace.
    pub fn process_with_diagnostics(
        &self,
        field: &mut GradientField,
    ) -> Result<LsrReport, LsrError> {
        let GradientField {
            orientation,
            magnitude,
            dx,
            dy,
        } = field;
        self.run(orientation, magnitude, dx, dy)
    }

    /// Standardize a raw channel, compute its gradients and extract.
    pub fn process_channel(&self, channel: &Raster<f64>) -> Result<LsrReport, LsrError> {
        let mut gradient_timing = TimingBreakdown::default();
        let mut field = gradient_timing.measure(Stage::Gradient, || {
            compute_gradient(&standardize(channel, self.params.ignore_numeric_warnings))
        });

        let mut report = self.process_with_diagnostics(&mut field)?;
        report.trace.timings.prepend(gradient_timing);
        Ok(report)
    }

    fn run(
        &self,
        orientation: &mut Raster<f64>,
        magnitude: &Raster<f64>,
        dx: &Raster<f64>,
        dy: &Raster<f64>,
    ) -> Result<LsrReport, LsrError> {
        orientation.ensure_same_shape(magnitude, "magnitude")?;
        orientation.ensure_same_shape(dx, "x derivative")?;
        orientation.ensure_same_shape(dy, "y derivative")?;

        let params = &self.params;
        let quiet = params.ignore_numeric_warnings;
        let (width, height) = (orientation.w, orientation.h);
        debug!(
            "LsrExtractor::run start w={} h={} mag_thresh={}",
            width, height, params.magnitude_threshold
        );
        let mut timings = TimingBreakdown::default();

        let edges = timings.measure(Stage::Edges, || {
            select_edges(orientation, magnitude, params.magnitude_threshold)
        });
        debug!("LsrExtractor::run edge_pixels={}", edges.len());

        let options = params.region_options();
        let mut table = RegionTable::new();
        let (schemes, maps): (Vec<SchemeStage>, Vec<_>) = timings.measure(Stage::Regions, || {
            OrientationScheme::BOTH
                .into_iter()
                .map(|scheme| {
                    let before = table.len();
                    let (acc, bins) = bin_regions(&edges, scheme, dx, dy, &mut table, &options);
                    let stage = SchemeStage {
                        scheme: acc.scheme(),
                        bins,
                        regions: table.len() - before,
                        assigned_pixels: acc.map().assigned_pixels(),
                    };
                    (stage, acc.into_map())
                })
                .unzip()
        });

        let outcome = timings.measure(Stage::Reconcile, || {
            reconcile(&maps[0], &maps[1], &mut table, params.vote_indexing)
        })?;

        let features = timings.measure(Stage::Features, || {
            reduce_features(&outcome.regions, quiet)
        });

        let survivors = if outcome.sentinel {
            0
        } else {
            outcome.regions.len()
        };
        debug!(
            "LsrExtractor::run done candidates={} survivors={} features={:?}",
            table.len(),
            survivors,
            features.to_array()
        );

        Ok(LsrReport {
            features,
            trace: LsrTrace {
                input: InputDescriptor { width, height },
                edge_pixels: edges.len(),
                schemes,
                reconcile: ReconcileStage {
                    candidates: table.len(),
                    survivors,
                    sentinel: outcome.sentinel,
                    votes: outcome.votes,
                },
                regions: outcome.regions,
                timings,
            },
        })
    }
}

/// Features of a channel whose gradients the caller already computed.
///
/// All four rasters must share one shape. `orientation` is folded into
/// `[0, 360)` in place.
pub fn extract_lsr_features(
    orientation: &mut Raster<f64>,
    magnitude: &Raster<f64>,
    dx: &Raster<f64>,
    dy: &Raster<f64>,
    params: &LsrParams,
) -> Result<LsrFeatures, LsrError> {
    let extractor = LsrExtractor::new(params.clone());
    Ok(extractor.run(orientation, magnitude, dx, dy)?.features)
}

/// Features of a raw channel: standardize, compute gradients, extract.
pub fn extract_channel_features(
    channel: &Raster<f64>,
    params: &LsrParams,
) -> Result<LsrFeatures, LsrError> {
    let extractor = LsrExtractor::new(params.clone());
    Ok(extractor.process_channel(channel)?.features)
}
