//! Pipeline configuration
//!
//! All input and output locations are carried in plain config structs that
//! are handed to a pipeline at construction. The WOA13v2 file-name
//! convention (`woa13_decav_t04_04v2.nc` for April temperature, tags 13-16
//! for the seasonal files) is resolved here so the rest of the code deals
//! only in month/season tags.

use std::path::{Path, PathBuf};

/// Depth (m) at which monthly profiles hand over to the seasonal ones.
///
/// WOA13v2 monthly climatologies stop at 1500 m; below that only the
/// seasonal files carry data.
pub const DEFAULT_SPLICE_DEPTH_M: f64 = 1500.0;

/// Configuration for the mesh-mask pipeline
#[derive(Debug, Clone)]
pub struct MeshMaskConfig {
    /// WOA temperature climatology used for grid axes, bounds and the land mask
    pub temperature_file: PathBuf,
    /// Where the mesh-mask file is written
    pub output_file: PathBuf,
}

impl MeshMaskConfig {
    pub fn new(temperature_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            temperature_file: temperature_file.into(),
            output_file: output_file.into(),
        }
    }
}

/// Configuration for the initial-state pipeline
#[derive(Debug, Clone)]
pub struct InitialStateConfig {
    /// Directory holding the WOA temperature files (monthly and seasonal)
    pub temperature_dir: PathBuf,
    /// Directory holding the WOA salinity files (monthly and seasonal)
    pub salinity_dir: PathBuf,
    /// Directory the two product files are written into
    pub output_dir: PathBuf,
    /// Depth at which the monthly profile hands over to the seasonal one
    pub splice_depth: f64,
}

impl InitialStateConfig {
    pub fn new(
        temperature_dir: impl Into<PathBuf>,
        salinity_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            temperature_dir: temperature_dir.into(),
            salinity_dir: salinity_dir.into(),
            output_dir: output_dir.into(),
            splice_depth: DEFAULT_SPLICE_DEPTH_M,
        }
    }

    /// Override the splice depth (unit must match the source depth axis)
    pub fn with_splice_depth(mut self, splice_depth: f64) -> Self {
        self.splice_depth = splice_depth;
        self
    }

    /// Temperature file for a month (01-12) or season (13-16) tag
    pub fn temperature_file(&self, tag: u32) -> PathBuf {
        woa_file(&self.temperature_dir, 't', tag)
    }

    /// Salinity file for a month (01-12) or season (13-16) tag
    pub fn salinity_file(&self, tag: u32) -> PathBuf {
        woa_file(&self.salinity_dir, 's', tag)
    }

    /// Output path for the Conservative Temperature product
    pub fn conservative_temperature_file(&self) -> PathBuf {
        self.output_dir.join("woa13v2.omip-clim.con_tem.nc")
    }

    /// Output path for the Absolute Salinity product
    pub fn absolute_salinity_file(&self) -> PathBuf {
        self.output_dir.join("woa13v2.omip-clim.abs_sal.nc")
    }
}

fn woa_file(dir: &Path, field: char, tag: u32) -> PathBuf {
    dir.join(format!("woa13_decav_{}{:02}_04v2.nc", field, tag))
}
