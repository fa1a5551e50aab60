//! Initial-state pipeline
//!
//! Builds thermodynamically consistent initial conditions from the WOA
//! monthly and seasonal climatologies: blend each month's profile with its
//! season's deep levels at the splice depth, stack the twelve months on a
//! time axis, convert to Conservative Temperature and Absolute Salinity,
//! and write the two product files.
//!
//! # Organization
//!
//! - [`seasons`]: month-to-seasonal-file mapping
//! - [`blend`]: depth splicing and time stacking
//! - [`convert`]: TEOS-10 conversion of the stacked state
//! - [`writer`]: product-file serialization

pub mod blend;
pub mod convert;
pub mod seasons;
pub mod writer;

pub use blend::{
    blend_month, shallow_levels, splice_index, splice_profiles, stack_months, BlendedMonth,
    StackedState,
};
pub use convert::{convert_state, ConvertedState};
pub use seasons::{months, season_for_month, MonthDescriptor};
pub use writer::write_products;

use crate::config::InitialStateConfig;
use crate::errors::Result;

/// Runs the initial-state pipeline end to end.
pub fn build_initial_state(config: &InitialStateConfig) -> Result<()> {
    let mut blended = Vec::with_capacity(12);
    for descriptor in months()? {
        println!("Processing month {:02}", descriptor.month);
        blended.push(blend_month(config, descriptor)?);
    }

    let state = stack_months(&blended)?;
    let converted = convert_state(&state)?;
    write_products(config, &state, &converted)?;

    println!(
        "✅ Wrote {} and {}",
        config.conservative_temperature_file().display(),
        config.absolute_salinity_file().display()
    );
    Ok(())
}
