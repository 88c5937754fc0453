//! Connected-component labeling of a binary mask.
//!
//! Labels are 1-based and numbered in raster order of each component's first
//! pixel; background stays 0.
use crate::raster::Raster;
use serde::{Deserialize, Serialize};

const CROSS_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Pixel neighbourhood used to join mask pixels into components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Connectivity {
    /// Edge-sharing neighbours only.
    #[default]
    Four,
    /// Edge- and corner-sharing neighbours.
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &CROSS_OFFSETS,
            Connectivity::Eight => &NEIGH_OFFSETS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ComponentLabels {
    pub labels: Raster<u32>,
    pub count: usize,
}

impl ComponentLabels {
    /// Pixel indices of each component, in raster scan order. Entry `i` holds
    /// label `i + 1`.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.count];
        for (idx, &label) in self.labels.data.iter().enumerate() {
            if label > 0 {
                out[label as usize - 1].push(idx);
            }
        }
        out
    }
}

/// Label the nonzero pixels of `mask`.
pub fn label_components(mask: &Raster<u8>, connectivity: Connectivity) -> ComponentLabels {
    let (w, h) = (mask.w, mask.h);
    let mut labels = Raster::<u32>::new(w, h);
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut count = 0u32;

    for seed in 0..w * h {
        if mask.data[seed] == 0 || labels.data[seed] != 0 {
            continue;
        }
        count += 1;
        labels.data[seed] = count;
        stack.push(seed);

        while let Some(idx) = stack.pop() {
            let x = idx % w;
            let y = idx / w;
            for &(dx, dy) in connectivity.offsets() {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let neighbor_idx = yn as usize * w + xn as usize;
                if mask.data[neighbor_idx] == 0 || labels.data[neighbor_idx] != 0 {
                    continue;
                }
                labels.data[neighbor_idx] = count;
                stack.push(neighbor_idx);
            }
        }
    }

    ComponentLabels {
        labels,
        count: count as usize,
    }
}
