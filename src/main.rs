//! Entry point for the WoaPrep application.
//! Handles CLI parsing, thread-pool setup, and dispatches the two pipelines.

use clap::Parser;
mod cli;

use cli::{Args, Command};
use woa_prep::climatology::build_initial_state;
use woa_prep::config::{InitialStateConfig, MeshMaskConfig};
use woa_prep::mesh::build_mesh_mask;
use woa_prep::parallel::{get_parallel_info, ParallelConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    println!(
        r#"
------------------------------------------------------------------
            __          __         _____
            \ \        / /        |  __ \
             \ \  /\  / /__   __ _| |__) | __ ___ _ __
              \ \/  \/ / _ \ / _` |  ___/ '__/ _ \ '_ \
               \  /\  / (_) | (_| | |   | | |  __/ |_) |
                \/  \/ \___/ \__,_|_|   |_|  \___| .__/
                                                 | |
                                                 |_|
                  WOA climatology preparation tool
------------------------------------------------------------------
                        "#
    );

    ParallelConfig::new(args.threads).setup_global_pool()?;
    if args.verbose {
        get_parallel_info().print_info();
    }

    match args.command {
        Command::MeshMask { input, output } => {
            let config = MeshMaskConfig::new(input, output);
            build_mesh_mask(&config)?;
        }
        Command::InitialState {
            temperature_dir,
            salinity_dir,
            output_dir,
            splice_depth,
        } => {
            let config = InitialStateConfig::new(temperature_dir, salinity_dir, output_dir)
                .with_splice_depth(splice_depth);
            build_initial_state(&config)?;
        }
    }

    Ok(())
}
