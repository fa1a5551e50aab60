//! WoaPrep: WOA climatology processing for ocean-model input files
//!
//! A Rust toolkit that turns World Ocean Atlas (WOA13v2) climatology files
//! into two derived NetCDF products: a NEMO-style mesh-mask file describing
//! an ocean model grid (staggered point positions, cell spacings, vertical
//! layer geometry and land/sea masks), and monthly initial-state files
//! carrying TEOS-10 Conservative Temperature and Absolute Salinity blended
//! from the monthly and seasonal climatologies.
//!
//! ## Key Features
//!
//! - **Mesh-mask builder**: T/U/V/F staggered positions, Haversine cell
//!   spacings, layer thicknesses and neighbor-shifted land/sea masks
//! - **Initial-state builder**: depth splicing of monthly and seasonal
//!   profiles, 12-month time stacking and TEOS-10 conversion
//! - **Parallel Processing**: per-cell loops computed with Rayon
//! - **Typed errors**: every failure mode surfaces as a [`WoaPrepError`]
//!
//! ## Module Organization
//!
//! - [`mesh`]: the mesh-mask pipeline
//! - [`climatology`]: the initial-state pipeline
//! - [`teos10`]: seawater conversion formulas
//! - [`netcdf_io`]: shared NetCDF readers and the dataset writer
//! - [`config`]: pipeline configuration structs
//! - [`parallel`]: parallel processing configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use woa_prep::prelude::*;
//!
//! // Build a mesh mask from one WOA temperature climatology
//! let config = MeshMaskConfig::new("woa13_decav_t13_04v2.nc", "mesh_mask_woa13v2.nc");
//! build_mesh_mask(&config).unwrap();
//!
//! // Build the blended, converted initial-state files
//! let config = InitialStateConfig::new("temperature/", "salinity/", ".");
//! build_initial_state(&config).unwrap();
//! ```

// Core modules
pub mod climatology;
pub mod config;
pub mod errors;
pub mod mesh;
pub mod netcdf_io;
pub mod parallel;
pub mod teos10;

// Direct re-exports for the public API
pub use climatology::build_initial_state;
pub use config::{InitialStateConfig, MeshMaskConfig};
pub use errors::{Result, WoaPrepError};
pub use mesh::build_mesh_mask;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::climatology::{build_initial_state, BlendedMonth, StackedState};
    pub use crate::config::{InitialStateConfig, MeshMaskConfig};
    pub use crate::errors::{Result, WoaPrepError};
    pub use crate::mesh::{build_mesh_mask, MeshMask};
    pub use crate::parallel::ParallelConfig;
}
