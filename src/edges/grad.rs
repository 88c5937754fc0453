//! Image gradients from a pair of 2×2 difference kernels.
//!
//! The kernels are applied as a correlation anchored at their lower-right
//! tap, so each output pixel looks at itself, its left, upper and upper-left
//! neighbours:
//!
//! - `dx = s(y,x) + s(y-1,x) - s(y,x-1) - s(y-1,x-1)`
//! - `dy = s(y,x) + s(y,x-1) - s(y-1,x) - s(y-1,x-1)`
//!
//! Out-of-raster samples are 0. Orientation is `atan2(dy, dx + 1e-5)` in
//! degrees, range (−180, 180]; the edge selector folds it into `[0, 360)`.
use crate::error::LsrError;
use crate::raster::Raster;
use log::warn;

type Kernel2 = [[f64; 2]; 2];

const KERNEL_X: Kernel2 = [[-1.0, 1.0], [-1.0, 1.0]];
const KERNEL_Y: Kernel2 = [[-1.0, -1.0], [1.0, 1.0]];

/// Added to `dx` before `atan2` so a vanishing horizontal derivative does
/// not flip the orientation sign.
const ORIENTATION_EPS: f64 = 1e-5;

/// Per-pixel gradient buffers, all of the same shape.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    /// Gradient orientation in degrees
    pub orientation: Raster<f64>,
    /// Euclidean magnitude per pixel: `sqrt(dx^2 + dy^2)`
    pub magnitude: Raster<f64>,
    /// Horizontal derivative
    pub dx: Raster<f64>,
    /// Vertical derivative
    pub dy: Raster<f64>,
}

impl GradientField {
    /// Assemble a field from caller-computed buffers, checking that all four
    /// share the orientation raster's shape.
    pub fn from_parts(
        orientation: Raster<f64>,
        magnitude: Raster<f64>,
        dx: Raster<f64>,
        dy: Raster<f64>,
    ) -> Result<Self, LsrError> {
        orientation.ensure_same_shape(&magnitude, "magnitude")?;
        orientation.ensure_same_shape(&dx, "x derivative")?;
        orientation.ensure_same_shape(&dy, "y derivative")?;
        Ok(Self {
            orientation,
            magnitude,
            dx,
            dy,
        })
    }
}

fn correlate_2x2(l: &Raster<f64>, kernel: &Kernel2, x: usize, y: usize) -> f64 {
    let mut sum = 0.0;
    for (ky, kernel_row) in kernel.iter().enumerate() {
        // anchor at (1, 1): tap (ky, kx) reads sample (y + ky - 1, x + kx - 1)
        let Some(yy) = (y + ky).checked_sub(1) else {
            continue;
        };
        for (kx, &weight) in kernel_row.iter().enumerate() {
            let Some(xx) = (x + kx).checked_sub(1) else {
                continue;
            };
            sum += l.get(xx, yy) * weight;
        }
    }
    sum
}

/// Compute derivatives, magnitude and orientation of a single channel.
pub fn compute_gradient(l: &Raster<f64>) -> GradientField {
    let (w, h) = (l.w, l.h);
    let mut orientation = Raster::new(w, h);
    let mut magnitude = Raster::new(w, h);
    let mut dx = Raster::new(w, h);
    let mut dy = Raster::new(w, h);

    for y in 0..h {
        for x in 0..w {
            let gx = correlate_2x2(l, &KERNEL_X, x, y);
            let gy = correlate_2x2(l, &KERNEL_Y, x, y);
            dx.set(x, y, gx);
            dy.set(x, y, gy);
            magnitude.set(x, y, (gx * gx + gy * gy).sqrt());
            orientation.set(x, y, gy.atan2(gx + ORIENTATION_EPS).to_degrees());
        }
    }

    GradientField {
        orientation,
        magnitude,
        dx,
        dy,
    }
}

/// Zero-mean, unit-variance copy of `l` (population standard deviation).
///
/// A flat or non-finite channel has no usable deviation; it is returned
/// mean-subtracted only, so a constant input becomes all zeros rather than
/// NaN. `quiet` suppresses the warning for that case.
pub fn standardize(l: &Raster<f64>, quiet: bool) -> Raster<f64> {
    let n = l.len();
    if n == 0 {
        return l.clone();
    }
    let mean = l.data.iter().sum::<f64>() / n as f64;
    let var = l
        .data
        .iter()
        .map(|&v| (v - mean) * (v - mean))
        .sum::<f64>()
        / n as f64;
    let std = var.sqrt();

    let scale = if std > 0.0 && std.is_finite() {
        1.0 / std
    } else {
        if !quiet {
            warn!("standardize: degenerate std={std}, returning mean-subtracted channel");
        }
        1.0
    };

    Raster {
        w: l.w,
        h: l.h,
        data: l.data.iter().map(|&v| (v - mean) * scale).collect(),
    }
}
