//! Month and season source tags
//!
//! WOA13v2 ships twelve monthly files (tags 01-12) and four seasonal files
//! (tags 13-16, one per calendar quarter). Each month's deep levels come
//! from the seasonal file of its quarter.

use crate::errors::{Result, WoaPrepError};

/// Seasonal file tag for a calendar month: 1-3 -> 13, 4-6 -> 14,
/// 7-9 -> 15, 10-12 -> 16. Any other month is an error.
pub fn season_for_month(month: u32) -> Result<u32> {
    match month {
        1..=3 => Ok(13),
        4..=6 => Ok(14),
        7..=9 => Ok(15),
        10..=12 => Ok(16),
        other => Err(WoaPrepError::Generic(format!(
            "month {} is outside 1-12 and has no seasonal file",
            other
        ))),
    }
}

/// One calendar month and the seasonal file backing its deep levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDescriptor {
    pub month: u32,
    pub season: u32,
}

/// The twelve months in calendar order with their season tags.
pub fn months() -> Result<Vec<MonthDescriptor>> {
    (1..=12)
        .map(|month| {
            Ok(MonthDescriptor {
                month,
                season: season_for_month(month)?,
            })
        })
        .collect()
}
