//! Booking price calculator
//!
//! Derives the nights / base / amenity / total breakdown for a prospective
//! booking. All arithmetic is done in integer cents.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::AMENITY_SURCHARGE_CENTS;
use crate::models::Money;
use crate::utils::time::days_between;

/// Flat surcharge applied once per selected amenity
pub const AMENITY_SURCHARGE: Money = Money::from_cents(AMENITY_SURCHARGE_CENTS);

/// Price breakdown for a stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: u32,
    pub base_price: Money,
    pub amenity_price: Money,
    pub total_price: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("check-out must be after check-in")]
    InvalidRange,

    #[error("price exceeds representable range")]
    Overflow,
}

/// Compute the quote for a stay from `check_in` (inclusive) to `check_out`.
///
/// Partial nights do not exist: dates are whole days. Guest count is not
/// considered here and must be validated by the caller against the resort.
pub fn compute_quote(
    check_in: NaiveDate,
    check_out: NaiveDate,
    nightly_rate: Money,
    selected_amenities: &BTreeSet<String>,
) -> Result<Quote, PricingError> {
    if check_out <= check_in {
        return Err(PricingError::InvalidRange);
    }

    let nights = days_between(check_in, check_out);
    let base_price = nightly_rate
        .checked_mul(nights)
        .ok_or(PricingError::Overflow)?;

    let amenity_count = i64::try_from(selected_amenities.len()).map_err(|_| PricingError::Overflow)?;
    let amenity_price = AMENITY_SURCHARGE
        .checked_mul(amenity_count)
        .ok_or(PricingError::Overflow)?;

    let total_price = base_price
        .checked_add(amenity_price)
        .ok_or(PricingError::Overflow)?;

    Ok(Quote {
        nights: u32::try_from(nights).map_err(|_| PricingError::Overflow)?,
        base_price,
        amenity_price,
        total_price,
    })
}
