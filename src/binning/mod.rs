//! Orientation quantization into two interleaved 8-bin partitions.
//!
//! - [`OrientationScheme::Aligned`]: boundaries `0, 45, ..., 360`, bins 1..=8.
//! - [`OrientationScheme::Offset`]: boundaries `22.5, 67.5, ..., 337.5`,
//!   bins 1..=7, plus a wrap bin covering `(337.5, 360] ∪ (0, 22.5]`.
//!
//! A value lands in bin `k` when `bounds[k-1] < v <= bounds[k]` (see
//! [`bucket_index`]). An orientation of exactly 0° falls in no bin of either
//! scheme.
use crate::edges::EdgePixelSet;
use crate::histogram::bucket_index;
use crate::raster::Raster;
use serde::{Deserialize, Serialize};

const ALIGNED_BOUNDS: [f64; 9] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 360.0];
const OFFSET_BOUNDS: [f64; 8] = [22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5, 337.5];
const WRAP_HIGH: [f64; 2] = [337.5, 360.0];
const WRAP_LOW: [f64; 2] = [0.0, 22.5];

/// One of the two orientation partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrientationScheme {
    /// 0°-aligned octants.
    Aligned,
    /// Octants shifted by 22.5°, with the 0°/360° octant as a wrap bin.
    Offset,
}

impl OrientationScheme {
    pub const BOTH: [OrientationScheme; 2] = [OrientationScheme::Aligned, OrientationScheme::Offset];

    pub fn boundaries(self) -> &'static [f64] {
        match self {
            OrientationScheme::Aligned => &ALIGNED_BOUNDS,
            OrientationScheme::Offset => &OFFSET_BOUNDS,
        }
    }

    /// Bin labels in processing order. The offset scheme's wrap bin is
    /// reported as `0` and comes last.
    pub fn bin_labels(self) -> Vec<u8> {
        match self {
            OrientationScheme::Aligned => (1..=8).collect(),
            OrientationScheme::Offset => (1..=7).chain(std::iter::once(WRAP_BIN)).collect(),
        }
    }

    /// Bin label for `orientation_deg`, or `None` when it falls outside every
    /// bin of this scheme.
    pub fn bin_of(self, orientation_deg: f64) -> Option<u8> {
        let bounds = self.boundaries();
        let k = bucket_index(bounds, orientation_deg);
        if (1..bounds.len()).contains(&k) {
            return Some(k as u8);
        }
        match self {
            OrientationScheme::Aligned => None,
            OrientationScheme::Offset => {
                let wraps = bucket_index(&WRAP_HIGH, orientation_deg) == 1
                    || bucket_index(&WRAP_LOW, orientation_deg) == 1;
                wraps.then_some(WRAP_BIN)
            }
        }
    }
}

/// Label of the offset scheme's wrap-around bin.
pub const WRAP_BIN: u8 = 0;

/// Edge pixels sharing one orientation bin.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationBin {
    pub scheme: OrientationScheme,
    pub label: u8,
    /// Linear pixel indices in raster scan order.
    pub pixels: Vec<usize>,
}

impl OrientationBin {
    /// Binary mask over a `w × h` raster: 1 at this bin's pixels.
    pub fn mask(&self, w: usize, h: usize) -> Raster<u8> {
        let mut mask = Raster::new(w, h);
        for &idx in &self.pixels {
            mask.data[idx] = 1;
        }
        mask
    }
}

/// Splits `edges` into the nonempty bins of `scheme`, in processing order.
pub fn partition(edges: &EdgePixelSet, scheme: OrientationScheme) -> Vec<OrientationBin> {
    let labels = scheme.bin_labels();
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); labels.len()];
    for (idx, ori) in edges.iter() {
        if let Some(label) = scheme.bin_of(ori) {
            // wrap bin is always the last slot
            let slot = match label {
                WRAP_BIN => labels.len() - 1,
                k => k as usize - 1,
            };
            buckets[slot].push(idx);
        }
    }

    labels
        .into_iter()
        .zip(buckets)
        .filter(|(_, pixels)| !pixels.is_empty())
        .map(|(label, pixels)| OrientationBin {
            scheme,
            label,
            pixels,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_from(orientations: &[f64]) -> EdgePixelSet {
        EdgePixelSet {
            indices: (0..orientations.len()).collect(),
            orientations: orientations.to_vec(),
        }
    }

    #[test]
    fn aligned_bins_at_boundaries() {
        let s = OrientationScheme::Aligned;
        assert_eq!(s.bin_of(0.0), None);
        assert_eq!(s.bin_of(0.1), Some(1));
        assert_eq!(s.bin_of(45.0), Some(1));
        assert_eq!(s.bin_of(45.1), Some(2));
        assert_eq!(s.bin_of(180.0), Some(4));
        assert_eq!(s.bin_of(315.0), Some(7));
        assert_eq!(s.bin_of(359.9), Some(8));
        assert_eq!(s.bin_of(360.0), Some(8));
    }

    #[test]
    fn offset_bins_at_boundaries() {
        let s = OrientationScheme::Offset;
        assert_eq!(s.bin_of(22.5), Some(WRAP_BIN));
        assert_eq!(s.bin_of(22.6), Some(1));
        assert_eq!(s.bin_of(67.5), Some(1));
        assert_eq!(s.bin_of(67.6), Some(2));
        assert_eq!(s.bin_of(337.5), Some(7));
        assert_eq!(s.bin_of(337.6), Some(WRAP_BIN));
        assert_eq!(s.bin_of(360.0), Some(WRAP_BIN));
        assert_eq!(s.bin_of(10.0), Some(WRAP_BIN));
        assert_eq!(s.bin_of(0.0), None);
    }

    #[test]
    fn every_positive_orientation_has_a_bin_in_both_schemes() {
        for step in 1..3600 {
            let ori = step as f64 * 0.1;
            for scheme in OrientationScheme::BOTH {
                assert!(scheme.bin_of(ori).is_some(), "{scheme:?} misses {ori}");
            }
        }
    }

    #[test]
    fn partition_keeps_scan_order_and_skips_empty_bins() {
        let edges = edges_from(&[10.0, 100.0, 350.0, 20.0, 95.0]);
        let aligned = partition(&edges, OrientationScheme::Aligned);
        let labels: Vec<u8> = aligned.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec![1, 3, 8]);
        assert_eq!(aligned[0].pixels, vec![0, 3]);
        assert_eq!(aligned[1].pixels, vec![1, 4]);

        let offset = partition(&edges, OrientationScheme::Offset);
        let labels: Vec<u8> = offset.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec![2, WRAP_BIN]);
        assert_eq!(offset[1].pixels, vec![0, 2, 3]);
    }

    #[test]
    fn mask_marks_bin_pixels() {
        let bin = OrientationBin {
            scheme: OrientationScheme::Aligned,
            label: 2,
            pixels: vec![1, 5],
        };
        let mask = bin.mask(3, 2);
        assert_eq!(mask.data, vec![0, 1, 0, 0, 0, 1]);
    }
}
