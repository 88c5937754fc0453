//! Reduction of surviving regions to three texture descriptors.
//!
//! Each region is bucketed by length (boundaries `5, 9, ..., 201`) and by
//! contrast (20 boundaries evenly spaced over `[0, 10]`). The per-region
//! bucket indices, normalized by their sum, form `lenpmf` and
//! `contrastpmf`, and:
//!
//! - `length_entropy   = -Σ lenpmf · ln(lenpmf + 1e-5)`
//! - `mean_contrast    = mean(contrast)`
//! - `contrast_entropy = -Σ contrastpmf · ln(lenpmf + 1e-5)`
//!
//! The last term weighs the contrast distribution against the *length*
//! log-probabilities; that pairing is kept as the established descriptor.
//! NaN results are replaced by 0; infinities are kept.
use crate::histogram::{bucket_index, linspace, pmf, stepped_boundaries};
use crate::regions::LineRegion;
use log::warn;
use serde::Serialize;

const ENTROPY_FLOOR: f64 = 1e-5;

/// The three LSR descriptors of one channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LsrFeatures {
    pub length_entropy: f64,
    pub mean_contrast: f64,
    pub contrast_entropy: f64,
}

impl LsrFeatures {
    pub fn to_array(&self) -> [f64; 3] {
        [self.length_entropy, self.mean_contrast, self.contrast_entropy]
    }
}

fn length_boundaries() -> Vec<f64> {
    stepped_boundaries(5.0, 204.0, 4.0)
}

fn contrast_boundaries() -> Vec<f64> {
    linspace(0.0, 10.0, (10.0f64 / 0.5).floor() as usize)
}

/// Reduce `regions` to [`LsrFeatures`]. An empty slice is treated as the
/// all-zero sentinel row. `quiet` silences the degeneracy warnings.
pub fn reduce_features(regions: &[LineRegion], quiet: bool) -> LsrFeatures {
    let sentinel = [LineRegion::SENTINEL];
    let regions = if regions.is_empty() {
        &sentinel[..]
    } else {
        regions
    };

    let len_bounds = length_boundaries();
    let con_bounds = contrast_boundaries();
    let len_counts: Vec<f64> = regions
        .iter()
        .map(|r| bucket_index(&len_bounds, r.length) as f64)
        .collect();
    let con_counts: Vec<f64> = regions
        .iter()
        .map(|r| bucket_index(&con_bounds, r.contrast) as f64)
        .collect();

    let (lenpmf, len_guarded) = pmf(&len_counts);
    let (contrastpmf, con_guarded) = pmf(&con_counts);
    if !quiet && (len_guarded || con_guarded) {
        warn!(
            "reduce_features: zero bucket total (length={len_guarded}, contrast={con_guarded}), pmf set to 0"
        );
    }

    let length_entropy = -lenpmf
        .iter()
        .map(|&p| p * (p + ENTROPY_FLOOR).ln())
        .sum::<f64>();
    let mean_contrast = regions.iter().map(|r| r.contrast).sum::<f64>() / regions.len() as f64;
    let contrast_entropy = -contrastpmf
        .iter()
        .zip(&lenpmf)
        .map(|(&c, &p)| c * (p + ENTROPY_FLOOR).ln())
        .sum::<f64>();

    LsrFeatures {
        length_entropy: nan_to_zero(length_entropy, "length_entropy", quiet),
        mean_contrast: nan_to_zero(mean_contrast, "mean_contrast", quiet),
        contrast_entropy: nan_to_zero(contrast_entropy, "contrast_entropy", quiet),
    }
}

fn nan_to_zero(value: f64, name: &str, quiet: bool) -> f64 {
    if value.is_nan() {
        if !quiet {
            warn!("reduce_features: {name} is NaN, replaced by 0");
        }
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(length: f64, contrast: f64) -> LineRegion {
        LineRegion {
            length,
            contrast,
            ..LineRegion::SENTINEL
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn boundaries_match_descriptor_layout() {
        let len = length_boundaries();
        assert_eq!(len.len(), 50);
        assert_eq!(len[0], 5.0);
        assert_eq!(len[49], 201.0);
        let con = contrast_boundaries();
        assert_eq!(con.len(), 20);
        assert_eq!(con[19], 10.0);
    }

    #[test]
    fn sentinel_reduces_to_zero() {
        let f = reduce_features(&[LineRegion::SENTINEL], true);
        assert_eq!(f.to_array(), [0.0, 0.0, 0.0]);
        assert!(f.to_array().iter().all(|v| !v.is_nan()));
        assert_eq!(reduce_features(&[], false), f);
    }

    #[test]
    fn single_region_has_near_zero_entropy() {
        let f = reduce_features(&[region(40.0, 3.0)], true);
        // lenpmf = [1]
        assert!(approx_eq(f.length_entropy, -(1.0 + ENTROPY_FLOOR).ln()));
        assert!(approx_eq(f.mean_contrast, 3.0));
        assert!(approx_eq(f.contrast_entropy, -(1.0 + ENTROPY_FLOOR).ln()));
    }

    #[test]
    fn equal_buckets_give_ln_two() {
        let f = reduce_features(&[region(350.0, 6.0), region(385.0, 6.0)], true);
        let expected = -(0.5 + ENTROPY_FLOOR).ln();
        assert!(approx_eq(f.length_entropy, expected));
        assert!(approx_eq(f.mean_contrast, 6.0));
        assert!(approx_eq(f.contrast_entropy, expected));
    }

    #[test]
    fn contrast_entropy_uses_length_log_terms() {
        // length buckets: 10 -> 2, 30 -> 7; contrast buckets: 1 -> 2, 9 -> 18
        let regions = [region(10.0, 1.0), region(30.0, 9.0)];
        let f = reduce_features(&regions, true);
        let lenpmf = [2.0 / 9.0, 7.0 / 9.0];
        let conpmf = [2.0 / 20.0, 18.0 / 20.0];
        let h_len: f64 = -lenpmf
            .iter()
            .map(|p| p * (p + ENTROPY_FLOOR).ln())
            .sum::<f64>();
        let h_con: f64 = -conpmf
            .iter()
            .zip(&lenpmf)
            .map(|(c, p)| c * (p + ENTROPY_FLOOR).ln())
            .sum::<f64>();
        assert!(approx_eq(f.length_entropy, h_len));
        assert!(approx_eq(f.mean_contrast, 5.0));
        assert!(approx_eq(f.contrast_entropy, h_con));
    }

    #[test]
    fn nan_contrast_is_coerced() {
        let f = reduce_features(&[region(12.0, f64::NAN)], true);
        assert_eq!(f.mean_contrast, 0.0);
        assert!(f.to_array().iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn infinite_contrast_is_not_coerced() {
        let f = reduce_features(&[region(12.0, f64::INFINITY)], true);
        assert_eq!(f.mean_contrast, f64::INFINITY);
        assert!(f.length_entropy.is_finite());
    }
}
