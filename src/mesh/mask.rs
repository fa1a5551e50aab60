//! Land/sea masks on the staggered grids
//!
//! The T mask is 1 wherever the climatology temperature is defined. The
//! U/V/F masks are products of the T mask with its neighbor-shifted copy:
//! a velocity or vorticity point is sea only when every adjacent T cell is
//! sea. Cells on the far edge of a shift have no neighbor and keep the
//! unshifted T-mask value; that fallback lives in its own function so the
//! boundary policy is testable on its own.

use ndarray::{Array3, Axis, Slice};

/// Binary sea(1)/land(0) masks for the four staggered point sets.
#[derive(Debug, Clone)]
pub struct MaskSet {
    pub tmask: Array3<i32>,
    pub umask: Array3<i32>,
    pub vmask: Array3<i32>,
    pub fmask: Array3<i32>,
}

/// Derives all four masks from a (depth, lat, lon) temperature field with
/// NaN as the missing sentinel.
pub fn compute_masks(temperature: &Array3<f64>) -> MaskSet {
    let tmask = temperature.mapv(|v| i32::from(!v.is_nan()));
    let umask = neighbor_product(&tmask, Axis(2));
    let vmask = neighbor_product(&tmask, Axis(1));
    let fmask = corner_product(&tmask);

    MaskSet {
        tmask,
        umask,
        vmask,
        fmask,
    }
}

/// Product of each cell with its next neighbor along `axis`; cells on the
/// far edge keep their own value.
pub fn neighbor_product(mask: &Array3<i32>, axis: Axis) -> Array3<i32> {
    let n = mask.len_of(axis);
    let mut out = mask.clone();
    if n < 2 {
        return out;
    }

    let shifted = mask.slice_axis(axis, Slice::from(1..));
    let mut head = out.slice_axis_mut(axis, Slice::from(..n - 1));
    head *= &shifted;

    out
}

/// Product of the four corner-adjacent cells; cells in the last row or
/// column keep the centre value.
pub fn corner_product(mask: &Array3<i32>) -> Array3<i32> {
    let (nk, nj, ni) = mask.dim();
    Array3::from_shape_fn((nk, nj, ni), |(k, j, i)| {
        if j + 1 < nj && i + 1 < ni {
            mask[[k, j, i]] * mask[[k, j, i + 1]] * mask[[k, j + 1, i]] * mask[[k, j + 1, i + 1]]
        } else {
            mask[[k, j, i]]
        }
    })
}
