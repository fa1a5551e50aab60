//! Vertical layer geometry
//!
//! Layer thicknesses and depth levels derived from the per-layer depth
//! bounds. Bounds are taken as strictly increasing and non-overlapping;
//! malformed bounds are not validated and propagate into the thicknesses.

use crate::errors::{Result, WoaPrepError};
use ndarray::{Array1, Array2, Array3};

/// 1-D vertical reference: thickness, centre depth and top depth per layer.
#[derive(Debug, Clone)]
pub struct VerticalGrid {
    /// Layer thickness, `upper bound - lower bound`
    pub e3t_1d: Array1<f64>,
    /// Depth at the layer centre (the depth coordinate itself)
    pub gdept_1d: Array1<f64>,
    /// Depth at the layer top (the lower bound)
    pub gdepw_1d: Array1<f64>,
}

/// The 1-D vertical reference broadcast over the horizontal grid.
#[derive(Debug, Clone)]
pub struct VerticalFields {
    pub e3_0: Array3<f64>,
    pub gdept_0: Array3<f64>,
    pub gdepw_0: Array3<f64>,
}

/// Derives the vertical reference from the depth axis and its bounds.
pub fn compute_vertical(depth: &Array1<f64>, depth_bnds: &Array2<f64>) -> Result<VerticalGrid> {
    if depth_bnds.nrows() != depth.len() {
        return Err(WoaPrepError::ShapeMismatch {
            message: format!(
                "depth axis has {} levels but bounds have {}",
                depth.len(),
                depth_bnds.nrows()
            ),
        });
    }

    let nk = depth.len();
    let e3t_1d = Array1::from_shape_fn(nk, |k| depth_bnds[[k, 1]] - depth_bnds[[k, 0]]);
    let gdepw_1d = Array1::from_shape_fn(nk, |k| depth_bnds[[k, 0]]);

    Ok(VerticalGrid {
        e3t_1d,
        gdept_1d: depth.clone(),
        gdepw_1d,
    })
}

impl VerticalGrid {
    /// Broadcasts the 1-D reference into full (z, y, x) fields.
    pub fn broadcast(&self, nj: usize, ni: usize) -> VerticalFields {
        let nk = self.gdept_1d.len();
        VerticalFields {
            e3_0: Array3::from_shape_fn((nk, nj, ni), |(k, _, _)| self.e3t_1d[k]),
            gdept_0: Array3::from_shape_fn((nk, nj, ni), |(k, _, _)| self.gdept_1d[k]),
            gdepw_0: Array3::from_shape_fn((nk, nj, ni), |(k, _, _)| self.gdepw_1d[k]),
        }
    }
}
