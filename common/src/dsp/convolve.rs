//! Separable 2D convolution.
//!
//! A separable kernel `k` applied along rows and then along columns is
//! equivalent to the 2D kernel `k * k^T`, at `2K` instead of `K^2`
//! multiplications per cell. The instrument uses it with a unit-sum low-pass
//! kernel to suppress per-pixel sensor noise before the grid is upscaled.
//!
//! # Borders
//!
//! Taps that fall outside the grid read the nearest edge sample
//! (clamp-to-edge). The grid is a physical field with no wraparound, and zero
//! padding would darken every edge by the missing kernel weight.

use super::{Grid, clamp_index};

/// Convolve `input` with `kernel` along both axes, writing into `output`.
///
/// `kernel` must have odd length; its center tap is aligned with the output
/// cell. Rows are filtered into `output`, then each column is filtered in
/// place through a single column of scratch.
pub fn convolve_separable<const H: usize, const W: usize, const K: usize>(
    input: &Grid<H, W>,
    kernel: &[f64; K],
    output: &mut Grid<H, W>,
) {
    const {
        assert!(K % 2 == 1, "kernel length must be odd");
        assert!(H > 0 && W > 0, "grid must not be empty");
    };

    let half = (K / 2) as isize;

    // Horizontal pass
    for (in_row, out_row) in input.iter().zip(output.iter_mut()) {
        for (x, out) in out_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - half, W);
                acc += weight * in_row[sx];
            }
            *out = acc;
        }
    }

    // Vertical pass
    let mut column = [0.0f64; H];
    for x in 0..W {
        for (y, cell) in column.iter_mut().enumerate() {
            *cell = output[y][x];
        }
        for (y, out_row) in output.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - half, H);
                acc += weight * column[sy];
            }
            out_row[x] = acc;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
