//! Spectral shape fit of one labeled component.
//!
//! The component's pixels (raster order) give a real signal `s_k = x_k * y_k`.
//! Its length-n DFT is centred (`fftshift`) and scaled by `1/n`; with
//! `idx = n/2 + 1` the three samples used are
//!
//! - `a[idx]`   (frequency 1): stored as the centroid term,
//! - `a[idx+1]` (frequency 2) and `a[idx-1]` (frequency 0): length is
//!   `2 (|a[idx+1]| + |a[idx-1]|)`, orientation the mean of their phases.
//!
//! Contrast is the largest `max(|dx|, |dy|)` over the component.
use super::types::RegionShape;
use crate::angle::mean_phase;
use crate::raster::Raster;
use num_complex::Complex64;
use rustfft::FftPlanner;

pub struct SpectralFitter {
    planner: FftPlanner<f64>,
    buffer: Vec<Complex64>,
}

impl Default for SpectralFitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralFitter {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
            buffer: Vec::new(),
        }
    }

    /// Fit the component made of `pixels` (linear indices into a raster of
    /// width `width`). Returns `None` for components too short to expose the
    /// `idx + 1` sample (fewer than 5 pixels).
    pub fn fit(
        &mut self,
        pixels: &[usize],
        width: usize,
        dx: &Raster<f64>,
        dy: &Raster<f64>,
    ) -> Option<RegionShape> {
        let n = pixels.len();
        if n == 0 || width == 0 {
            return None;
        }

        self.buffer.clear();
        self.buffer.extend(pixels.iter().map(|&idx| {
            let x = (idx % width) as f64;
            let y = (idx / width) as f64;
            Complex64::new(x * y, 0.0)
        }));
        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut self.buffer);

        let scale = 1.0 / n as f64;
        let shifted = fftshift(&self.buffer);
        let idx = n / 2 + 1;
        let centre = *shifted.get(idx)? * scale;
        let next = *shifted.get(idx + 1)? * scale;
        let prev = *shifted.get(idx - 1)? * scale;

        let length = 2.0 * (next.norm() + prev.norm());
        let orientation_rad = mean_phase(next.arg(), prev.arg());
        let contrast = pixels
            .iter()
            .map(|&i| dx.data[i].abs().max(dy.data[i].abs()))
            .fold(f64::NEG_INFINITY, f64::max);

        Some(RegionShape {
            length,
            centroid: centre,
            orientation_rad,
            contrast,
        })
    }
}

/// Rotates the spectrum so the zero frequency sits at index `n / 2`.
fn fftshift(spectrum: &[Complex64]) -> Vec<Complex64> {
    let n = spectrum.len();
    let half = n / 2;
    (0..n).map(|j| spectrum[(j + n - half) % n]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grads(w: usize, h: usize, v: f64) -> (Raster<f64>, Raster<f64>) {
        let mut dx = Raster::new(w, h);
        dx.data.fill(v);
        (dx.clone(), dx)
    }

    /// Reference DFT sample at frequency `f`, scaled by `1/n`.
    fn dft(signal: &[f64], f: usize) -> Complex64 {
        let n = signal.len();
        let mut acc = Complex64::new(0.0, 0.0);
        for (k, &s) in signal.iter().enumerate() {
            let phase = -2.0 * std::f64::consts::PI * (f * k) as f64 / n as f64;
            acc += Complex64::from_polar(s, phase);
        }
        acc / n as f64
    }

    #[test]
    fn fftshift_centres_zero_frequency() {
        let even: Vec<Complex64> = (0..6).map(|v| Complex64::new(v as f64, 0.0)).collect();
        let re: Vec<f64> = fftshift(&even).iter().map(|c| c.re).collect();
        assert_eq!(re, vec![3.0, 4.0, 5.0, 0.0, 1.0, 2.0]);

        let odd: Vec<Complex64> = (0..5).map(|v| Complex64::new(v as f64, 0.0)).collect();
        let re: Vec<f64> = fftshift(&odd).iter().map(|c| c.re).collect();
        assert_eq!(re, vec![3.0, 4.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn fit_matches_reference_dft() {
        let w = 16;
        let (dx, dy) = flat_grads(w, 16, 1.0);
        let pixels: Vec<usize> = (0..7).map(|k| (3 + k) * w + 2 + k).collect();
        let signal: Vec<f64> = pixels
            .iter()
            .map(|&i| ((i % w) * (i / w)) as f64)
            .collect();

        let shape = SpectralFitter::new().fit(&pixels, w, &dx, &dy).unwrap();
        let f0 = dft(&signal, 0);
        let f1 = dft(&signal, 1);
        let f2 = dft(&signal, 2);
        assert!((shape.centroid - f1).norm() < 1e-9);
        assert!((shape.length - 2.0 * (f2.norm() + f0.norm())).abs() < 1e-9);
        assert!((shape.orientation_rad - (f2.arg() + f0.arg()) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_is_max_abs_derivative() {
        let w = 8;
        let mut dx = Raster::new(w, 8);
        let mut dy = Raster::new(w, 8);
        let pixels: Vec<usize> = (0..6).map(|k| w + k).collect();
        dx.data[w + 1] = -2.5;
        dy.data[w + 4] = 4.0;
        dy.data[5 * w] = 99.0; // outside the component
        let shape = SpectralFitter::new().fit(&pixels, w, &dx, &dy).unwrap();
        assert_eq!(shape.contrast, 4.0);
    }

    #[test]
    fn short_components_are_skipped() {
        let (dx, dy) = flat_grads(8, 8, 1.0);
        let mut fitter = SpectralFitter::new();
        assert!(fitter.fit(&[], 8, &dx, &dy).is_none());
        assert!(fitter.fit(&[9, 10, 11, 12], 8, &dx, &dy).is_none());
        assert!(fitter.fit(&[9, 10, 11, 12, 13], 8, &dx, &dy).is_some());
    }
}
