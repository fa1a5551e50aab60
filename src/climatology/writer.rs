//! Product-file serialization
//!
//! Two files, one per converted property: Conservative Temperature as
//! `thetao_con` and Absolute Salinity as `so_abs`, each over
//! (time, depth, lat, lon) with `time` unbounded and no `_FillValue`
//! attributes.

use super::blend::StackedState;
use super::convert::ConvertedState;
use crate::config::InitialStateConfig;
use crate::errors::Result;
use crate::netcdf_io::DatasetWriter;
use ndarray::ArrayView4;
use std::path::Path;

/// Writes both product files and returns their paths.
pub fn write_products(
    config: &InitialStateConfig,
    state: &StackedState,
    converted: &ConvertedState,
) -> Result<()> {
    write_product(
        &config.conservative_temperature_file(),
        "thetao_con",
        converted.conservative_temperature.view(),
        state,
    )?;
    write_product(
        &config.absolute_salinity_file(),
        "so_abs",
        converted.absolute_salinity.view(),
        state,
    )?;
    Ok(())
}

fn write_product(
    output_path: &Path,
    var_name: &str,
    data: ArrayView4<'_, f64>,
    state: &StackedState,
) -> Result<()> {
    let (_, nk, nj, ni) = data.dim();

    let mut writer = DatasetWriter::create(output_path)?;
    writer.add_unlimited_dimension("time")?;
    writer.add_dimension("depth", nk)?;
    writer.add_dimension("lat", nj)?;
    writer.add_dimension("lon", ni)?;

    writer.put_coordinate("time", "time", &state.time.to_vec())?;
    writer.put_coordinate("depth", "depth", &state.depth.to_vec())?;
    writer.put_coordinate("lat", "lat", &state.lat.to_vec())?;
    writer.put_coordinate("lon", "lon", &state.lon.to_vec())?;

    writer.put_f64(
        var_name,
        &["time", "depth", "lat", "lon"],
        data.into_dyn(),
    )?;

    writer.add_history("WoaPrep initial-state")?;
    Ok(())
}
