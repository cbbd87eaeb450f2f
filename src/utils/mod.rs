//! Utility functions

pub mod time;
pub mod validation;

pub use time::{now_utc, parse_date};
pub use validation::{parse_amenity_list, sanitize_string};
