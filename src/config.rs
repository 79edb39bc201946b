//! Build-time Settings
//!
//! The app has no runtime configuration; everything tunable lives here.

use std::num::NonZeroU32;
use std::ops::RangeInclusive;

/// localStorage key holding the serialized item collection
pub const STORAGE_KEY: &str = "guardaCoisas";

/// Quantities offered by the add form
pub const QUANTITY_CHOICES: RangeInclusive<u32> = 1..=20;

/// Quantity selected when the form is (re)set
pub const DEFAULT_QUANTITY: NonZeroU32 = NonZeroU32::MIN;

/// Console log level
pub fn log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}
