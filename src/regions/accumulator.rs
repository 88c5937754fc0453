use super::label::label_components;
use super::options::RegionOptions;
use super::spectral::SpectralFitter;
use super::types::{BinSummary, RegionMap, RegionRecord, RegionShape, RegionTable};
use crate::binning::{partition, OrientationBin, OrientationScheme};
use crate::edges::EdgePixelSet;
use crate::raster::Raster;
use log::debug;

/// A component that passed the size gate, fitted but not yet numbered.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedRegion {
    pub pixels: Vec<usize>,
    pub shape: RegionShape,
}

/// Region map of one orientation scheme, grown bin by bin.
///
/// Ids come from the shared [`RegionTable`], so the two schemes draw from
/// one id space while each keeps its own map.
#[derive(Clone, Debug)]
pub struct RegionAccumulator {
    scheme: OrientationScheme,
    map: RegionMap,
}

impl RegionAccumulator {
    pub fn new(scheme: OrientationScheme, w: usize, h: usize) -> Self {
        Self {
            scheme,
            map: RegionMap::new(w, h),
        }
    }

    pub fn scheme(&self) -> OrientationScheme {
        self.scheme
    }

    pub fn map(&self) -> &RegionMap {
        &self.map
    }

    pub fn into_map(self) -> RegionMap {
        self.map
    }

    /// Number each fitted region with the table's next id and paint its
    /// pixels into the map. Returns the ids assigned, in input order.
    pub fn commit(&mut self, table: &mut RegionTable, fitted: Vec<FittedRegion>) -> Vec<u32> {
        let mut ids = Vec::with_capacity(fitted.len());
        for region in fitted {
            let id = table.push(RegionRecord::new(self.scheme, region.shape));
            for &idx in &region.pixels {
                self.map.ids.data[idx] = id;
                self.map.lengths.data[idx] = region.shape.length;
            }
            ids.push(id);
        }
        ids
    }
}

/// Label `mask` and fit every component larger than `options.min_pixels`.
/// Returns the fitted regions in label order and the raw component count.
pub fn fit_mask_regions(
    mask: &Raster<u8>,
    dx: &Raster<f64>,
    dy: &Raster<f64>,
    options: &RegionOptions,
    fitter: &mut SpectralFitter,
) -> (Vec<FittedRegion>, usize) {
    let labels = label_components(mask, options.connectivity);
    let fitted = labels
        .components()
        .into_iter()
        .filter(|pixels| pixels.len() > options.min_pixels)
        .filter_map(|pixels| {
            let shape = fitter.fit(&pixels, mask.w, dx, dy)?;
            Some(FittedRegion { pixels, shape })
        })
        .collect();
    (fitted, labels.count)
}

/// Extract the regions of one binary edge mask into `acc`, continuing the
/// id sequence of `table`. Returns the ids assigned.
pub fn generate_regions(
    mask: &Raster<u8>,
    acc: &mut RegionAccumulator,
    table: &mut RegionTable,
    dx: &Raster<f64>,
    dy: &Raster<f64>,
    options: &RegionOptions,
) -> Vec<u32> {
    let mut fitter = SpectralFitter::new();
    let (fitted, _) = fit_mask_regions(mask, dx, dy, options, &mut fitter);
    acc.commit(table, fitted)
}

/// Run every nonempty bin of `scheme` through the labeler and collect the
/// scheme's region map. Bins are fitted independently (in parallel with the
/// `parallel` feature) and committed in bin order, so ids do not depend on
/// scheduling.
pub fn bin_regions(
    edges: &EdgePixelSet,
    scheme: OrientationScheme,
    dx: &Raster<f64>,
    dy: &Raster<f64>,
    table: &mut RegionTable,
    options: &RegionOptions,
) -> (RegionAccumulator, Vec<BinSummary>) {
    let (w, h) = (dx.w, dx.h);
    let bins = partition(edges, scheme);
    let fitted_bins = fit_bins(&bins, dx, dy, options);

    let mut acc = RegionAccumulator::new(scheme, w, h);
    let mut summaries = Vec::with_capacity(bins.len());
    for (bin, (fitted, components)) in bins.iter().zip(fitted_bins) {
        let first_id = table.next_id();
        let ids = acc.commit(table, fitted);
        debug!(
            "bin_regions {:?} bin={} pixels={} components={} regions={} first_id={}",
            scheme,
            bin.label,
            bin.pixels.len(),
            components,
            ids.len(),
            first_id
        );
        summaries.push(BinSummary {
            label: bin.label,
            pixels: bin.pixels.len(),
            components,
            regions: ids.len(),
        });
    }
    (acc, summaries)
}

#[cfg(feature = "parallel")]
fn fit_bins(
    bins: &[OrientationBin],
    dx: &Raster<f64>,
    dy: &Raster<f64>,
    options: &RegionOptions,
) -> Vec<(Vec<FittedRegion>, usize)> {
    use rayon::prelude::*;

    bins.par_iter()
        .map(|bin| {
            let mut fitter = SpectralFitter::new();
            fit_mask_regions(&bin.mask(dx.w, dx.h), dx, dy, options, &mut fitter)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn fit_bins(
    bins: &[OrientationBin],
    dx: &Raster<f64>,
    dy: &Raster<f64>,
    options: &RegionOptions,
) -> Vec<(Vec<FittedRegion>, usize)> {
    let mut fitter = SpectralFitter::new();
    bins.iter()
        .map(|bin| fit_mask_regions(&bin.mask(dx.w, dx.h), dx, dy, options, &mut fitter))
        .collect()
}
