use crate::binning::OrientationScheme;
use crate::raster::Raster;
use num_complex::Complex64;
use serde::Serialize;

/// Shape descriptors fitted to one component by [`super::SpectralFitter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionShape {
    pub length: f64,
    /// Spectral sample at the first positive frequency; stored, not used.
    pub centroid: Complex64,
    pub orientation_rad: f64,
    pub contrast: f64,
}

/// One extracted region plus its reconciliation vote count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionRecord {
    pub scheme: OrientationScheme,
    pub shape: RegionShape,
    /// Net vote from dual-pass reconciliation; the region survives when > 0.
    pub survival: i64,
}

impl RegionRecord {
    pub fn new(scheme: OrientationScheme, shape: RegionShape) -> Self {
        Self {
            scheme,
            shape,
            survival: 0,
        }
    }

    /// Projection used after reconciliation (vote count dropped).
    pub fn line_region(&self) -> LineRegion {
        LineRegion {
            length: self.shape.length,
            centroid_re: self.shape.centroid.re,
            centroid_im: self.shape.centroid.im,
            orientation_rad: self.shape.orientation_rad,
            contrast: self.shape.contrast,
        }
    }
}

/// Surviving line support region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRegion {
    pub length: f64,
    pub centroid_re: f64,
    pub centroid_im: f64,
    pub orientation_rad: f64,
    pub contrast: f64,
}

impl LineRegion {
    /// Placeholder row returned when nothing survives.
    pub const SENTINEL: LineRegion = LineRegion {
        length: 0.0,
        centroid_re: 0.0,
        centroid_im: 0.0,
        orientation_rad: 0.0,
        contrast: 0.0,
    };

    pub fn as_row(&self) -> [f64; 5] {
        [
            self.length,
            self.centroid_re,
            self.centroid_im,
            self.orientation_rad,
            self.contrast,
        ]
    }
}

/// Per-pixel region ownership for one orientation scheme.
///
/// `ids` holds 0 for unassigned pixels, else the 1-based region id; `lengths`
/// holds the fitted length of that region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionMap {
    pub ids: Raster<u32>,
    pub lengths: Raster<f64>,
}

impl RegionMap {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            ids: Raster::new(w, h),
            lengths: Raster::new(w, h),
        }
    }

    pub fn assigned_pixels(&self) -> usize {
        self.ids.data.iter().filter(|&&id| id > 0).count()
    }
}

/// Region records of both schemes, indexed by `id - 1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionTable {
    records: Vec<RegionRecord>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` and returns its 1-based id.
    pub fn push(&mut self, record: RegionRecord) -> u32 {
        self.records.push(record);
        self.records.len() as u32
    }

    /// Id the next pushed record will receive.
    pub fn next_id(&self) -> u32 {
        self.records.len() as u32 + 1
    }

    pub fn get(&self, id: u32) -> Option<&RegionRecord> {
        id.checked_sub(1)
            .and_then(|idx| self.records.get(idx as usize))
    }

    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [RegionRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Per-bin counts for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinSummary {
    pub label: u8,
    pub pixels: usize,
    pub components: usize,
    pub regions: usize,
}
