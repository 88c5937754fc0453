//! Sorted-boundary bucketing and PMF normalization.
//!
//! Every quantization step in the pipeline (orientation bins, region length
//! and contrast buckets) goes through [`bucket_index`], which returns the
//! insertion point of a value into an ascending boundary list. A value lands
//! in bucket `k` when `bounds[k-1] < v <= bounds[k]`. Values at or below the
//! first boundary get bucket 0, values above the last get `bounds.len()`.

/// Insertion point of `value` into ascending `bounds`, left side.
#[inline]
pub fn bucket_index(bounds: &[f64], value: f64) -> usize {
    bounds.partition_point(|&b| b < value)
}

/// `start, start + step, ...` while strictly below `stop`.
pub fn stepped_boundaries(start: f64, stop: f64, step: f64) -> Vec<f64> {
    assert!(step > 0.0, "boundary step must be positive");
    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// `num` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut out: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            out[num - 1] = stop;
            out
        }
    }
}

/// Normalizes `counts` by their sum. A zero sum yields all zeros instead of
/// NaN. The flag reports whether that guard fired.
pub fn pmf(counts: &[f64]) -> (Vec<f64>, bool) {
    let total: f64 = counts.iter().sum();
    if total == 0.0 {
        (vec![0.0; counts.len()], true)
    } else {
        (counts.iter().map(|c| c / total).collect(), false)
    }
}
