//! Thermodynamic conversion of the stacked state
//!
//! Applies the TEOS-10 conversions cell by cell over the stacked 4-D
//! arrays: practical salinity to Absolute Salinity, then in-situ
//! temperature to Conservative Temperature using the converted salinity.
//! Pressure depends only on depth and latitude, so it is computed once per
//! (depth, lat) pair; the per-cell loops run in parallel over a flattened
//! index.

use super::blend::StackedState;
use crate::errors::Result;
use crate::teos10;
use ndarray::{Array2, Array4};
use rayon::prelude::*;

/// Converted property fields, (time, depth, lat, lon).
#[derive(Debug, Clone)]
pub struct ConvertedState {
    pub conservative_temperature: Array4<f64>,
    pub absolute_salinity: Array4<f64>,
}

/// Converts the stacked in-situ temperature / practical salinity pair.
/// NaN (land) cells stay NaN.
pub fn convert_state(state: &StackedState) -> Result<ConvertedState> {
    let (nt, nk, nj, ni) = state.temperature.dim();

    let pressure = Array2::from_shape_fn((nk, nj), |(k, j)| {
        teos10::pressure_from_depth(state.depth[k], state.lat[j])
    });

    let total = nt * nk * nj * ni;
    println!(
        "⚡ Converting {} cells across {} CPU cores",
        total,
        rayon::current_num_threads()
    );

    let sa: Vec<f64> = (0..total)
        .into_par_iter()
        .map(|flat_idx| {
            let (t, k, j, i) = unflatten(flat_idx, nk, nj, ni);
            teos10::absolute_salinity(
                state.salinity[[t, k, j, i]],
                pressure[[k, j]],
                state.lon[i],
                state.lat[j],
            )
        })
        .collect();
    let absolute_salinity = Array4::from_shape_vec((nt, nk, nj, ni), sa)?;

    let ct: Vec<f64> = (0..total)
        .into_par_iter()
        .map(|flat_idx| {
            let (t, k, j, i) = unflatten(flat_idx, nk, nj, ni);
            teos10::conservative_temperature(
                absolute_salinity[[t, k, j, i]],
                state.temperature[[t, k, j, i]],
                pressure[[k, j]],
            )
        })
        .collect();
    let conservative_temperature = Array4::from_shape_vec((nt, nk, nj, ni), ct)?;

    Ok(ConvertedState {
        conservative_temperature,
        absolute_salinity,
    })
}

fn unflatten(flat_idx: usize, nk: usize, nj: usize, ni: usize) -> (usize, usize, usize, usize) {
    let i = flat_idx % ni;
    let j = (flat_idx / ni) % nj;
    let k = (flat_idx / (ni * nj)) % nk;
    let t = flat_idx / (ni * nj * nk);
    (t, k, j, i)
}
