//! Staggered horizontal grid-point positions
//!
//! Finite-difference ocean grids place four point sets inside each cell:
//! the centre (T), the two edge midpoints (U east, V north) and the corner
//! (F). The offsets are derived from the 1-D coordinate axes by averaging
//! each coordinate with its next neighbor; the last point, which has no
//! neighbor, takes the upper bound of the last cell.

use ndarray::{Array1, Array2};

/// Longitude/latitude location of one staggered point set, broadcast to 2-D
/// with shape (lat, lon).
#[derive(Debug, Clone)]
pub struct StaggeredPositions {
    pub glam: Array2<f64>,
    pub gphi: Array2<f64>,
}

/// Positions of all four staggered point sets.
#[derive(Debug, Clone)]
pub struct GridPositions {
    pub t: StaggeredPositions,
    pub u: StaggeredPositions,
    pub v: StaggeredPositions,
    pub f: StaggeredPositions,
}

/// Derives the T/U/V/F point positions from the coordinate axes and their
/// cell bounds.
pub fn compute_positions(
    lon: &Array1<f64>,
    lat: &Array1<f64>,
    lon_bnds: &Array2<f64>,
    lat_bnds: &Array2<f64>,
) -> GridPositions {
    let lon_u = offset_axis(lon, lon_bnds);
    let lat_v = offset_axis(lat, lat_bnds);

    GridPositions {
        t: broadcast_pair(lon, lat),
        u: broadcast_pair(&lon_u, lat),
        v: broadcast_pair(lon, &lat_v),
        f: broadcast_pair(&lon_u, &lat_v),
    }
}

/// Midpoint of each coordinate with its next neighbor along the axis; the
/// final point falls back to the upper bound of the last cell.
pub fn offset_axis(coords: &Array1<f64>, bounds: &Array2<f64>) -> Array1<f64> {
    let n = coords.len();
    Array1::from_shape_fn(n, |i| {
        if i + 1 < n {
            0.5 * (coords[i] + coords[i + 1])
        } else {
            bounds[[n - 1, 1]]
        }
    })
}

fn broadcast_pair(lon: &Array1<f64>, lat: &Array1<f64>) -> StaggeredPositions {
    let shape = (lat.len(), lon.len());
    StaggeredPositions {
        glam: Array2::from_shape_fn(shape, |(_, i)| lon[i]),
        gphi: Array2::from_shape_fn(shape, |(j, _)| lat[j]),
    }
}
