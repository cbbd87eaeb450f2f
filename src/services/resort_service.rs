//! Resort browsing service

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    access::{self, Action},
    backend::Backend,
    error::{AppError, AppResult},
    models::{Money, Resort, Role},
    pricing::{compute_quote, Quote},
};

/// Listing filters; an empty filter matches every resort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResortFilter {
    /// Case-insensitive match on name, location or description
    pub query: Option<String>,
    pub location: Option<String>,
    /// A resort must offer all of these
    pub amenities: BTreeSet<String>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub guests: Option<u32>,
}

impl ResortFilter {
    pub fn validate(&self) -> AppResult<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(AppError::Validation(
                    "Minimum price cannot exceed maximum price".to_string(),
                ));
            }
        }
        if self.guests == Some(0) {
            return Err(AppError::Validation("Guests must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn matches(&self, resort: &Resort) -> bool {
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let hit = resort.name.to_lowercase().contains(&query)
                || resort.location.to_lowercase().contains(&query)
                || resort.description.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !resort.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }

        if !self.amenities.iter().all(|a| resort.offers(a)) {
            return false;
        }

        if self.min_price.is_some_and(|min| resort.price_per_night < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| resort.price_per_night > max) {
            return false;
        }

        self.guests.is_none_or(|guests| resort.max_guests >= guests)
    }
}

/// Filtered resorts plus every amenity offered across the catalogue
#[derive(Debug, Clone)]
pub struct Listing {
    pub resorts: Vec<Resort>,
    pub available_amenities: BTreeSet<String>,
}

/// A prospective stay at a resort
#[derive(Debug, Clone, PartialEq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: Option<u32>,
    pub selected_amenities: BTreeSet<String>,
}

/// Price a stay after checking it against the resort.
///
/// The date range is checked first, then capacity, then that every
/// selected amenity is one the resort offers.
pub fn price_stay(resort: &Resort, stay: &Stay) -> AppResult<Quote> {
    let quote = compute_quote(
        stay.check_in,
        stay.check_out,
        resort.price_per_night,
        &stay.selected_amenities,
    )?;

    if let Some(guests) = stay.guests {
        if !resort.accommodates(guests) {
            return Err(AppError::Validation(format!(
                "Number of guests must be between 1 and {}",
                resort.max_guests
            )));
        }
    }

    let unknown = resort.unknown_amenities(&stay.selected_amenities);
    if !unknown.is_empty() {
        return Err(AppError::Validation(format!(
            "Amenities not offered by this resort: {}",
            unknown.join(", ")
        )));
    }

    Ok(quote)
}

/// Resort service for public browsing
pub struct ResortService;

impl ResortService {
    /// List resorts matching a filter
    pub async fn browse(
        backend: &dyn Backend,
        role: Option<Role>,
        filter: &ResortFilter,
    ) -> AppResult<Listing> {
        access::enforce(role, Action::BrowseResorts)?;
        filter.validate()?;

        let all = backend.list_resorts().await?;
        let available_amenities = all
            .iter()
            .flat_map(|r| r.amenities.iter().cloned())
            .collect();

        let total = all.len();
        let resorts: Vec<Resort> = all.into_iter().filter(|r| filter.matches(r)).collect();
        debug!(total, matched = resorts.len(), "Resort listing filtered");

        Ok(Listing {
            resorts,
            available_amenities,
        })
    }

    /// Get a single resort
    pub async fn get(backend: &dyn Backend, role: Option<Role>, id: &str) -> AppResult<Resort> {
        access::enforce(role, Action::BrowseResorts)?;
        backend.get_resort(id).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("Resort not found".to_string()),
            other => other,
        })
    }

    /// Quote a stay without booking it
    pub async fn quote(
        backend: &dyn Backend,
        role: Option<Role>,
        id: &str,
        stay: &Stay,
    ) -> AppResult<Quote> {
        let resort = Self::get(backend, role, id).await?;
        price_stay(&resort, stay)
    }
}
