//! Display colors for progress bars and categories.

use crate::constants::CATEGORY_PALETTE;
use rand::seq::SliceRandom;

pub const PROGRESS_LOW: &str = "#F26158";
pub const PROGRESS_MEDIUM: &str = "#F2A05D";
pub const PROGRESS_HIGH: &str = "#F4EB70";
pub const PROGRESS_DONE: &str = "#A7D3A6";

/// Color bands for a 0-100 progress value, red through green.
#[must_use]
pub fn progress_color(progress: u8) -> &'static str {
    match progress {
        0..=25 => PROGRESS_LOW,
        26..=50 => PROGRESS_MEDIUM,
        51..=75 => PROGRESS_HIGH,
        _ => PROGRESS_DONE,
    }
}

/// Pick a category color. Colors are not persisted; every fetch reassigns them.
#[must_use]
pub fn random_category_color() -> String {
    CATEGORY_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(CATEGORY_PALETTE[0])
        .to_string()
}
