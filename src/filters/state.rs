// src/filters/state.rs

use crate::domain::Property;
use serde::{Deserialize, Serialize};

/// Sentinel for "no constraint" in the type and status selects.
pub const ALL: &str = "all";

/// Price range used when there are no prices to derive one from.
pub const FALLBACK_PRICE_RANGE: [f64; 2] = [0.0, 10_000_000.0];

/// The six predicates a catalog view filters on.
///
/// The array shapes mirror the slider widgets that drive them: a single-thumb
/// slider for the minimums and a two-thumb slider for the price range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub property_type: String,
    pub bedrooms_min: [u32; 1],
    pub bathrooms_min: [u32; 1],
    /// `[min, max]`, inclusive. Ordering is left to the caller.
    pub price_range: [f64; 2],
    pub status: String,
}

impl FilterState {
    /// Defaults for a given source collection.
    pub fn defaults_for(properties: &[Property]) -> Self {
        FilterState {
            search_term: String::new(),
            property_type: ALL.to_string(),
            bedrooms_min: [0],
            bathrooms_min: [0],
            price_range: default_price_range(properties),
            status: ALL.to_string(),
        }
    }
}

/// `[min(prices), max(prices)]`, or the fallback range for an empty collection.
pub fn default_price_range(properties: &[Property]) -> [f64; 2] {
    let mut prices = properties.iter().map(|p| p.price);

    let Some(first) = prices.next() else {
        return FALLBACK_PRICE_RANGE;
    };

    prices.fold([first, first], |[lo, hi], price| {
        [lo.min(price), hi.max(price)]
    })
}
