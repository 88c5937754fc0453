//! Owned single-channel raster in row-major layout.
//!
//! Used for every per-pixel array in the pipeline: the input channel, the
//! gradient buffers (`f64`), binary edge masks (`u8`) and region id maps
//! (`u32`). Linear indices follow raster scan order, `idx = y * w + x`.
use crate::error::LsrError;

#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T = f64> {
    /// Number of columns
    pub w: usize,
    /// Number of rows
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<T>,
}

impl<T: Copy + Default> Raster<T> {
    /// Construct a default-initialized raster of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![T::default(); w * h],
        }
    }
}

impl<T: Copy> Raster<T> {
    /// Wrap an existing row-major buffer.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self, LsrError> {
        if data.len() != w * h {
            return Err(LsrError::BufferSize {
                expected: w * h,
                found: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    /// Build a raster from nested rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, LsrError> {
        let h = rows.len();
        let w = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(w * h);
        for row in rows {
            if row.len() != w {
                return Err(LsrError::BufferSize {
                    expected: w * h,
                    found: rows.iter().map(Vec::len).sum(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.h, self.w)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fail with [`LsrError::ShapeMismatch`] unless `other` has this shape.
    pub fn ensure_same_shape<U>(&self, other: &Raster<U>, name: &'static str) -> Result<(), LsrError> {
        if self.w == other.w && self.h == other.h {
            Ok(())
        } else {
            Err(LsrError::ShapeMismatch {
                name,
                expected: self.shape(),
                found: (other.h, other.w),
            })
        }
    }
}
