//! Grid resizing from sensor resolution to display resolution.
//!
//! Both variants map output cell `d` to the fractional source coordinate
//! `s = d * (src_len / dst_len)`:
//!
//! - **Nearest**: takes sample `floor(s)`. Used by the LCD heatmap, which
//!   redraws straight from temperatures with no animation.
//! - **Bilinear**: blends the samples at `floor(s)` and `floor(s) + 1` on each
//!   axis by the fractional offset. Used by the animated auxiliary heatmap.
//!
//! Source indices past the last sample are clamped to it, so the right and
//! bottom edges repeat the final row/column instead of reading out of bounds.

use super::Grid;

/// Source index feeding output index `dst` under nearest-neighbor resizing.
#[inline]
pub fn nearest_source_index(
    dst: usize,
    src_len: usize,
    dst_len: usize,
) -> usize {
    let ratio = src_len as f64 / dst_len as f64;
    let src = libm::floor(dst as f64 * ratio) as usize;
    src.min(src_len - 1)
}

/// Lower tap, upper tap and weight of the upper tap for output index `dst`.
#[inline]
fn bilinear_taps(
    dst: usize,
    src_len: usize,
    ratio: f64,
) -> (usize, usize, f64) {
    let src = dst as f64 * ratio;
    let lower = libm::floor(src);
    let fraction = src - lower;
    let i0 = (lower as usize).min(src_len - 1);
    let i1 = (i0 + 1).min(src_len - 1);
    (i0, i1, fraction)
}

/// Resize with nearest-neighbor sampling.
pub fn resize_nearest<const SH: usize, const SW: usize, const DH: usize, const DW: usize>(
    input: &Grid<SH, SW>,
    output: &mut Grid<DH, DW>,
) {
    const { assert!(SH > 0 && SW > 0 && DH > 0 && DW > 0, "grids must not be empty") };

    for (y, out_row) in output.iter_mut().enumerate() {
        let in_row = &input[nearest_source_index(y, SH, DH)];
        for (x, out) in out_row.iter_mut().enumerate() {
            *out = in_row[nearest_source_index(x, SW, DW)];
        }
    }
}

/// Resize with bilinear interpolation of the four surrounding samples.
pub fn resize_bilinear<const SH: usize, const SW: usize, const DH: usize, const DW: usize>(
    input: &Grid<SH, SW>,
    output: &mut Grid<DH, DW>,
) {
    const { assert!(SH > 0 && SW > 0 && DH > 0 && DW > 0, "grids must not be empty") };

    let y_ratio = SH as f64 / DH as f64;
    let x_ratio = SW as f64 / DW as f64;

    for (y, out_row) in output.iter_mut().enumerate() {
        let (y0, y1, fy) = bilinear_taps(y, SH, y_ratio);
        let top = &input[y0];
        let bottom = &input[y1];

        for (x, out) in out_row.iter_mut().enumerate() {
            let (x0, x1, fx) = bilinear_taps(x, SW, x_ratio);
            let upper = top[x0] + fx * (top[x1] - top[x0]);
            let lower = bottom[x0] + fx * (bottom[x1] - bottom[x0]);
            *out = upper + fy * (lower - upper);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
