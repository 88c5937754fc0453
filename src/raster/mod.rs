pub mod owned;

pub use self::owned::Raster;
