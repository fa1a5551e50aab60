//! Defines command-line interface options using `clap` for the WoaPrep application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A CLI tool for preparing ocean-model input files from WOA climatologies
#[derive(Parser, Debug)]
#[command(
    version = "0.1.0",
    name = "WoaPrep",
    about = "App for building NEMO mesh-mask and initial-state files from WOA climatologies"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long, global = true)]
    pub threads: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the mesh-mask file from a WOA temperature climatology
    MeshMask {
        /// Path to the WOA temperature NetCDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Path of the mesh-mask file to write
        #[arg(short, long, default_value = "mesh_mask_woa13v2.nc")]
        output: PathBuf,
    },

    /// Build the monthly Conservative Temperature / Absolute Salinity files
    InitialState {
        /// Directory containing the WOA temperature files
        #[arg(long)]
        temperature_dir: PathBuf,

        /// Directory containing the WOA salinity files
        #[arg(long)]
        salinity_dir: PathBuf,

        /// Directory the product files are written into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Depth at which monthly profiles hand over to the seasonal ones
        #[arg(long, default_value_t = woa_prep::config::DEFAULT_SPLICE_DEPTH_M)]
        splice_depth: f64,
    },
}
