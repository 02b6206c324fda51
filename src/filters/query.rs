// src/filters/query.rs

use crate::filters::state::FilterState;
use crate::filters::store::PropertyFilterStore;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Filter fields as they travel in a URL query, a form body or a saved preset.
///
/// Absent fields leave the store untouched, so a preset can be applied first and
/// a visitor's query layered on top of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl FilterQuery {
    /// Parses an `application/x-www-form-urlencoded` string.
    pub fn parse(encoded: &str) -> Self {
        Self::from_pairs(form_urlencoded::parse(encoded.as_bytes()))
    }

    /// Empty values and numbers that do not parse are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = FilterQuery::default();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "q" => query.q = Some(value.to_string()),
                "type" => query.property_type = Some(value.to_string()),
                "bedrooms" => query.bedrooms = value.parse().ok().or(query.bedrooms),
                "bathrooms" => query.bathrooms = value.parse().ok().or(query.bathrooms),
                "min_price" => query.min_price = parse_price(value).or(query.min_price),
                "max_price" => query.max_price = parse_price(value).or(query.max_price),
                "status" => query.status = Some(value.to_string()),
                "page" => query.page = value.parse().ok().or(query.page),
                _ => {}
            }
        }

        query
    }

    /// Describes the non-default predicates of `state` as a query.
    pub fn from_state(state: &FilterState, defaults: &FilterState) -> Self {
        let [min_price, max_price] = state.price_range;
        let [default_min, default_max] = defaults.price_range;

        FilterQuery {
            q: Some(state.search_term.clone()).filter(|q| *q != defaults.search_term),
            property_type: Some(state.property_type.clone())
                .filter(|t| *t != defaults.property_type),
            bedrooms: Some(state.bedrooms_min[0]).filter(|n| *n != defaults.bedrooms_min[0]),
            bathrooms: Some(state.bathrooms_min[0]).filter(|n| *n != defaults.bathrooms_min[0]),
            min_price: Some(min_price).filter(|p| *p != default_min),
            max_price: Some(max_price).filter(|p| *p != default_max),
            status: Some(state.status.clone()).filter(|s| *s != defaults.status),
            page: None,
        }
    }

    /// Feeds the present fields to the store's setters.
    pub fn apply(&self, store: &mut PropertyFilterStore) {
        if let Some(q) = &self.q {
            store.set_search_term(q.as_str());
        }
        if let Some(t) = &self.property_type {
            store.set_property_type(t.as_str());
        }
        if let Some(n) = self.bedrooms {
            store.set_bedrooms_min([n]);
        }
        if let Some(n) = self.bathrooms {
            store.set_bathrooms_min([n]);
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let [current_min, current_max] = store.price_range();
            store.set_price_range([
                self.min_price.unwrap_or(current_min),
                self.max_price.unwrap_or(current_max),
            ]);
        }
        if let Some(s) = &self.status {
            store.set_status(s.as_str());
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        FilterQuery {
            page: Some(page),
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterQuery::default()
    }

    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(q) = &self.q {
            out.append_pair("q", q);
        }
        if let Some(t) = &self.property_type {
            out.append_pair("type", t);
        }
        if let Some(n) = self.bedrooms {
            out.append_pair("bedrooms", &n.to_string());
        }
        if let Some(n) = self.bathrooms {
            out.append_pair("bathrooms", &n.to_string());
        }
        if let Some(p) = self.min_price {
            out.append_pair("min_price", &p.to_string());
        }
        if let Some(p) = self.max_price {
            out.append_pair("max_price", &p.to_string());
        }
        if let Some(s) = &self.status {
            out.append_pair("status", s);
        }
        if let Some(p) = self.page {
            out.append_pair("page", &p.to_string());
        }

        out.finish()
    }
}

fn parse_price(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// One page of a filtered listing. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slices `items` into pages of `per_page`. Out-of-range page numbers clamp to
/// the first or last page.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let number = page.clamp(1, total_pages);

    let start = (number - 1) * per_page;
    let end = (start + per_page).min(total);

    Page {
        items: &items[start.min(total)..end],
        number,
        per_page,
        total,
        total_pages,
    }
}
