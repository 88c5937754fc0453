use lsr_features::{GradientField, Raster};

/// Blank channel with a one-pixel horizontal bar of `value` on row `row`,
/// spanning columns `x0..x1`.
pub fn horizontal_bar(
    width: usize,
    height: usize,
    row: usize,
    x0: usize,
    x1: usize,
    value: f64,
) -> Raster<f64> {
    assert!(row < height && x1 <= width, "bar must fit inside the channel");
    let mut channel = Raster::new(width, height);
    for x in x0..x1 {
        channel.set(x, row, value);
    }
    channel
}

/// Gradient field holding a single diagonal streak of `len` pixels starting
/// at `(start, start)`, every pixel oriented at 45° with `dx = dy = step`.
/// All other pixels carry zero magnitude.
pub fn diagonal_streak(size: usize, start: usize, len: usize, step: f64) -> GradientField {
    assert!(start + len <= size, "streak must fit inside the field");
    let mut orientation = Raster::new(size, size);
    let mut magnitude = Raster::new(size, size);
    let mut dx = Raster::new(size, size);
    let mut dy = Raster::new(size, size);
    for k in 0..len {
        let p = start + k;
        orientation.set(p, p, 45.0);
        magnitude.set(p, p, step * std::f64::consts::SQRT_2);
        dx.set(p, p, step);
        dy.set(p, p, step);
    }
    GradientField {
        orientation,
        magnitude,
        dx,
        dy,
    }
}
