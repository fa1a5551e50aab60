//! Monthly/seasonal depth splicing and time stacking
//!
//! WOA monthly climatologies stop partway down the water column; the
//! seasonal ones reach the bottom. Each month is blended by keeping the
//! monthly levels down to the splice depth and appending the seasonal
//! levels past it, then the twelve blended months are stacked on a new
//! leading time axis. The seasonal data inherits the monthly file's time
//! label (a relabeling, not a resampling).

use super::seasons::MonthDescriptor;
use crate::config::InitialStateConfig;
use crate::errors::{Result, WoaPrepError};
use crate::netcdf_io;
use ndarray::{concatenate, s, stack, Array1, Array3, Array4, Axis};

/// Blended profiles for one calendar month.
#[derive(Debug, Clone)]
pub struct BlendedMonth {
    pub month: u32,
    /// Time label taken from the monthly file
    pub time: f64,
    pub depth: Array1<f64>,
    pub lat: Array1<f64>,
    pub lon: Array1<f64>,
    /// In-situ temperature, (depth, lat, lon)
    pub temperature: Array3<f64>,
    /// Practical salinity, (depth, lat, lon)
    pub salinity: Array3<f64>,
}

/// Twelve blended months stacked on a leading time axis.
#[derive(Debug, Clone)]
pub struct StackedState {
    pub time: Array1<f64>,
    pub depth: Array1<f64>,
    pub lat: Array1<f64>,
    pub lon: Array1<f64>,
    /// In-situ temperature, (time, depth, lat, lon)
    pub temperature: Array4<f64>,
    /// Practical salinity, (time, depth, lat, lon)
    pub salinity: Array4<f64>,
}

/// Index of the level lying exactly at the splice depth.
pub fn splice_index(depth: &Array1<f64>, splice_depth: f64) -> Result<usize> {
    depth
        .iter()
        .position(|&d| d == splice_depth)
        .ok_or(WoaPrepError::SpliceDepthNotFound {
            depth: splice_depth,
        })
}

/// Number of leading levels at or above the splice depth.
pub fn shallow_levels(depth: &Array1<f64>, splice_depth: f64) -> usize {
    depth.iter().take_while(|&&d| d <= splice_depth).count()
}

/// Concatenates the first `n_shallow` levels of the monthly profile with
/// the seasonal levels past `splice_idx`, so the splice level itself
/// appears exactly once.
pub fn splice_profiles(
    shallow: &Array3<f64>,
    n_shallow: usize,
    deep: &Array3<f64>,
    splice_idx: usize,
) -> Result<Array3<f64>> {
    let top = shallow.slice(s![..n_shallow, .., ..]);
    let bottom = deep.slice(s![splice_idx + 1.., .., ..]);
    Ok(concatenate(Axis(0), &[top, bottom])?)
}

fn splice_axis(
    shallow: &Array1<f64>,
    n_shallow: usize,
    deep: &Array1<f64>,
    splice_idx: usize,
) -> Result<Array1<f64>> {
    let top = shallow.slice(s![..n_shallow]);
    let bottom = deep.slice(s![splice_idx + 1..]);
    Ok(concatenate(Axis(0), &[top, bottom])?)
}

/// Loads the four source files for one month and blends them.
pub fn blend_month(
    config: &InitialStateConfig,
    descriptor: MonthDescriptor,
) -> Result<BlendedMonth> {
    let t_month = netcdf::open(config.temperature_file(descriptor.month))?;
    let s_month = netcdf::open(config.salinity_file(descriptor.month))?;
    let t_season = netcdf::open(config.temperature_file(descriptor.season))?;
    let s_season = netcdf::open(config.salinity_file(descriptor.season))?;

    let month_depth = netcdf_io::read_coordinate(&t_month, "depth")?;
    let season_depth = netcdf_io::read_coordinate(&t_season, "depth")?;
    let lat = netcdf_io::read_coordinate(&t_month, "lat")?;
    let lon = netcdf_io::read_coordinate(&t_month, "lon")?;
    let time = netcdf_io::read_time_value(&t_month)?;

    let n_shallow = shallow_levels(&month_depth, config.splice_depth);
    let splice_idx = splice_index(&season_depth, config.splice_depth)?;

    let temperature = splice_profiles(
        &netcdf_io::read_field_3d(&t_month, "t_an")?,
        n_shallow,
        &netcdf_io::read_field_3d(&t_season, "t_an")?,
        splice_idx,
    )?;
    let salinity = splice_profiles(
        &netcdf_io::read_field_3d(&s_month, "s_an")?,
        n_shallow,
        &netcdf_io::read_field_3d(&s_season, "s_an")?,
        splice_idx,
    )?;
    let depth = splice_axis(&month_depth, n_shallow, &season_depth, splice_idx)?;

    Ok(BlendedMonth {
        month: descriptor.month,
        time,
        depth,
        lat,
        lon,
        temperature,
        salinity,
    })
}

/// Stacks blended months along a new leading time axis, in the order
/// given. Coordinates are taken from the first month.
pub fn stack_months(months: &[BlendedMonth]) -> Result<StackedState> {
    let first = months
        .first()
        .ok_or_else(|| WoaPrepError::Generic("no blended months to stack".to_string()))?;

    let t_views: Vec<_> = months.iter().map(|m| m.temperature.view()).collect();
    let s_views: Vec<_> = months.iter().map(|m| m.salinity.view()).collect();
    let temperature = stack(Axis(0), &t_views)?;
    let salinity = stack(Axis(0), &s_views)?;
    let time = Array1::from_iter(months.iter().map(|m| m.time));

    Ok(StackedState {
        time,
        depth: first.depth.clone(),
        lat: first.lat.clone(),
        lon: first.lon.clone(),
        temperature,
        salinity,
    })
}
