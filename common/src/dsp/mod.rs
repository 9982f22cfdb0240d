//! Signal processing for 2D temperature fields.
//!
//! - [`convolve`]: separable low-pass filtering with clamp-to-edge borders
//! - [`resample`]: nearest-neighbor and bilinear resizing to display resolution
//!
//! All routines work on caller-owned, fixed-size grids and never allocate.
//! Grid dimensions are const generics, so a mismatched buffer is a compile
//! error rather than a runtime bounds failure.

pub mod convolve;
pub mod resample;

pub use convolve::convolve_separable;
pub use resample::{nearest_source_index, resize_bilinear, resize_nearest};

/// Row-major 2D grid of Celsius values, `H` rows by `W` columns.
pub type Grid<const H: usize, const W: usize> = [[f64; W]; H];

/// Clamp a possibly out-of-range tap position to `[0, len)`.
#[inline]
pub(crate) fn clamp_index(
    index: isize,
    len: usize,
) -> usize {
    index.clamp(0, len as isize - 1) as usize
}
