use crate::angle::normalize_degrees;
use crate::raster::Raster;
use serde::Serialize;

/// Edge pixels in raster scan order, paired with their orientation.
///
/// `indices` are unique linear indices (`y * w + x`); `orientations[i]` is
/// the normalized orientation in degrees of pixel `indices[i]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgePixelSet {
    pub indices: Vec<usize>,
    pub orientations: Vec<f64>,
}

impl EdgePixelSet {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices
            .iter()
            .copied()
            .zip(self.orientations.iter().copied())
    }
}

/// Folds every negative orientation of `orientation` into `[0, 360)` in
/// place, then keeps pixels whose magnitude is strictly above `threshold`.
///
/// The fold covers the whole raster, including pixels that are not selected;
/// callers observe the normalized orientation afterwards. Shapes are expected
/// to match (checked by the caller).
pub fn select_edges(
    orientation: &mut Raster<f64>,
    magnitude: &Raster<f64>,
    threshold: f64,
) -> EdgePixelSet {
    for v in orientation.data.iter_mut() {
        *v = normalize_degrees(*v);
    }

    let mut edges = EdgePixelSet::default();
    for (idx, (&mag, &ori)) in magnitude
        .data
        .iter()
        .zip(orientation.data.iter())
        .enumerate()
    {
        if mag > threshold {
            edges.indices.push(idx);
            edges.orientations.push(ori);
        }
    }
    edges
}
