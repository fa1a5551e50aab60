//! Horizontal cell spacings
//!
//! East-west (`e1`) and north-south (`e2`) cell widths in meters, computed
//! as the great-circle distance between each cell's coordinate bounds. The
//! per-cell loop is embarrassingly parallel and is computed over a
//! flattened index with Rayon.

use crate::errors::{Result, WoaPrepError};
use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Earth radius used for great-circle distances, in meters.
pub const EARTH_RADIUS_M: f64 = 6_372_800.0;

/// Great-circle distance in meters between (lon1, lat1) and (lon2, lat2),
/// both in degrees, using the Haversine formula.
///
/// The `atan2` form is used for the central angle; unlike the `asin` form
/// it stays numerically stable for near-coincident and near-antipodal
/// points.
pub fn haversine_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let dlon = (lon2 - lon1).to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    // Square of half the chord length between the points
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * angle
}

/// Horizontal cell widths along each axis, shape (lat, lon), in meters.
///
/// By convention the same fields serve all four staggered grids.
#[derive(Debug, Clone)]
pub struct CellSpacing {
    pub e1: Array2<f64>,
    pub e2: Array2<f64>,
}

/// Computes `e1` (between the cell's longitude bounds at the cell latitude)
/// and `e2` (between the cell's latitude bounds at the cell longitude).
pub fn compute_spacing(
    lon: &Array1<f64>,
    lat: &Array1<f64>,
    lon_bnds: &Array2<f64>,
    lat_bnds: &Array2<f64>,
) -> Result<CellSpacing> {
    if lon_bnds.nrows() != lon.len() || lat_bnds.nrows() != lat.len() {
        return Err(WoaPrepError::ShapeMismatch {
            message: format!(
                "coordinate/bounds length mismatch: lon {} vs {}, lat {} vs {}",
                lon.len(),
                lon_bnds.nrows(),
                lat.len(),
                lat_bnds.nrows()
            ),
        });
    }

    let (nj, ni) = (lat.len(), lon.len());

    let e1: Vec<f64> = (0..nj * ni)
        .into_par_iter()
        .map(|flat_idx| {
            let j = flat_idx / ni;
            let i = flat_idx % ni;
            haversine_distance(lon_bnds[[i, 0]], lat[j], lon_bnds[[i, 1]], lat[j])
        })
        .collect();

    let e2: Vec<f64> = (0..nj * ni)
        .into_par_iter()
        .map(|flat_idx| {
            let j = flat_idx / ni;
            let i = flat_idx % ni;
            haversine_distance(lon[i], lat_bnds[[j, 0]], lon[i], lat_bnds[[j, 1]])
        })
        .collect();

    Ok(CellSpacing {
        e1: Array2::from_shape_vec((nj, ni), e1)?,
        e2: Array2::from_shape_vec((nj, ni), e2)?,
    })
}
