// src/filters/store.rs

use crate::domain::Property;
use crate::filters::state::{FilterState, ALL};
use tracing::debug;

/// Holds a source collection, the filter predicates over it, and the filtered
/// result derived from both.
///
/// Every mutator recomputes the result before returning, so
/// [`filtered_properties`](Self::filtered_properties) is never stale.
#[derive(Debug, Clone)]
pub struct PropertyFilterStore {
    source: Vec<Property>,
    state: FilterState,
    filtered: Vec<Property>,
}

impl PropertyFilterStore {
    /// Binds a store to `properties` with every filter at its default.
    pub fn initialize(properties: Vec<Property>) -> Self {
        let state = FilterState::defaults_for(&properties);
        let mut store = PropertyFilterStore {
            source: properties,
            state,
            filtered: Vec::new(),
        };
        store.recompute();
        store
    }

    /// Swaps in a freshly fetched collection.
    ///
    /// The default price range is re-derived from the new collection right away,
    /// the other predicates are kept as they are.
    #[allow(dead_code)]
    pub fn replace_source(&mut self, properties: Vec<Property>) {
        self.source = properties;
        self.state.price_range = FilterState::defaults_for(&self.source).price_range;
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.recompute();
    }

    pub fn set_property_type(&mut self, property_type: impl Into<String>) {
        self.state.property_type = property_type.into();
        self.recompute();
    }

    pub fn set_bedrooms_min(&mut self, values: [u32; 1]) {
        self.state.bedrooms_min = values;
        self.recompute();
    }

    pub fn set_bathrooms_min(&mut self, values: [u32; 1]) {
        self.state.bathrooms_min = values;
        self.recompute();
    }

    pub fn set_price_range(&mut self, values: [f64; 2]) {
        self.state.price_range = values;
        self.recompute();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.state.status = status.into();
        self.recompute();
    }

    /// Puts every predicate back to its default, deriving the price range from
    /// the current source collection.
    pub fn reset_filters(&mut self) {
        self.state = FilterState::defaults_for(&self.source);
        self.recompute();
    }

    pub fn filtered_properties(&self) -> &[Property] {
        &self.filtered
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn source(&self) -> &[Property] {
        &self.source
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    pub fn property_type(&self) -> &str {
        &self.state.property_type
    }

    pub fn bedrooms_min(&self) -> [u32; 1] {
        self.state.bedrooms_min
    }

    pub fn bathrooms_min(&self) -> [u32; 1] {
        self.state.bathrooms_min
    }

    pub fn price_range(&self) -> [f64; 2] {
        self.state.price_range
    }

    pub fn status(&self) -> &str {
        &self.state.status
    }

    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.source, &self.state);
        debug!(
            total = self.source.len(),
            matched = self.filtered.len(),
            "recomputed filtered properties"
        );
    }
}

/// Runs the predicates in order, each narrowing the previous step.
/// Relative order of the source is preserved.
pub fn apply_filters(source: &[Property], state: &FilterState) -> Vec<Property> {
    let mut result: Vec<Property> = source.to_vec();

    if !state.search_term.is_empty() {
        let needle = state.search_term.to_lowercase();
        result.retain(|p| matches_search(p, &needle));
    }

    if state.property_type != ALL {
        result.retain(|p| p.kind.as_str() == state.property_type);
    }

    let [bedrooms] = state.bedrooms_min;
    if bedrooms > 0 {
        result.retain(|p| p.bedrooms >= bedrooms);
    }

    let [bathrooms] = state.bathrooms_min;
    if bathrooms > 0 {
        result.retain(|p| p.bathrooms >= bathrooms);
    }

    let [min_price, max_price] = state.price_range;
    result.retain(|p| p.price >= min_price && p.price <= max_price);

    if state.status != ALL {
        result.retain(|p| p.status.as_str() == state.status);
    }

    result
}

/// Plain lower-case substring match; accents are not folded.
fn matches_search(p: &Property, needle: &str) -> bool {
    [&p.title, &p.description, &p.city, &p.state]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyStatus, PropertyType};
    use crate::filters::state::FALLBACK_PRICE_RANGE;

    fn prop(
        id: &str,
        kind: PropertyType,
        status: PropertyStatus,
        bedrooms: u32,
        bathrooms: u32,
        price: f64,
    ) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Listing {id}"),
            description: String::new(),
            address: String::new(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            kind,
            status,
            bedrooms,
            bathrooms,
            price,
            area_m2: None,
            created_at: 0,
        }
    }

    /// Five listings, two of them houses, one with three bedrooms.
    fn catalog() -> Vec<Property> {
        use PropertyStatus::*;
        use PropertyType::*;
        vec![
            prop("a", Apartment, ForSale, 1, 1, 100_000.0),
            prop("b", House, ForSale, 2, 1, 250_000.0),
            prop("c", Apartment, ForRent, 2, 2, 400_000.0),
            prop("d", House, Sold, 3, 2, 900_000.0),
            prop("e", Commercial, ForSale, 0, 1, 2_000_000.0),
        ]
    }

    fn ids(store: &PropertyFilterStore) -> Vec<&str> {
        store
            .filtered_properties()
            .iter()
            .map(|p| p.id.as_str())
            .collect()
    }

    #[test]
    fn initialize_derives_price_range_and_keeps_everything() {
        let store = PropertyFilterStore::initialize(catalog());
        assert_eq!(store.price_range(), [100_000.0, 2_000_000.0]);
        assert_eq!(store.filtered_properties().len(), 5);
        assert_eq!(store.search_term(), "");
        assert_eq!(store.property_type(), ALL);
        assert_eq!(store.bedrooms_min(), [0]);
        assert_eq!(store.bathrooms_min(), [0]);
        assert_eq!(store.status(), ALL);
    }

    #[test]
    fn empty_collection_uses_fallback_range() {
        let store = PropertyFilterStore::initialize(Vec::new());
        assert_eq!(store.price_range(), FALLBACK_PRICE_RANGE);
        assert!(store.filtered_properties().is_empty());
    }

    #[test]
    fn type_filter_stacks_with_full_price_range() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_property_type("house");
        assert_eq!(ids(&store), vec!["b", "d"]);
    }

    #[test]
    fn bedrooms_and_type_intersect() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_bedrooms_min([3]);
        assert_eq!(ids(&store), vec!["d"]);

        store.set_property_type("house");
        assert_eq!(ids(&store), vec!["d"]);

        store.set_property_type("apartment");
        assert!(store.filtered_properties().is_empty());
    }

    #[test]
    fn bathrooms_minimum() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_bathrooms_min([2]);
        assert_eq!(ids(&store), vec!["c", "d"]);
    }

    #[test]
    fn status_is_exact_match() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_status("forSale");
        assert_eq!(ids(&store), vec!["a", "b", "e"]);

        store.set_status("for_sale");
        assert!(store.filtered_properties().is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut props = catalog();
        props[2].title = "Linda casa com quintal".to_string();
        let mut store = PropertyFilterStore::initialize(props);

        store.set_search_term("CASA");
        assert_eq!(ids(&store), vec!["c"]);

        // substring, not word match
        store.set_search_term("uinta");
        assert_eq!(ids(&store), vec!["c"]);
    }

    #[test]
    fn search_covers_description_city_and_state() {
        let mut props = catalog();
        props[0].description = "Vista para o mar".to_string();
        props[1].city = "Florianópolis".to_string();
        props[3].state = "SC".to_string();
        let mut store = PropertyFilterStore::initialize(props);

        store.set_search_term("mar");
        assert_eq!(ids(&store), vec!["a"]);

        store.set_search_term("florianópolis");
        assert_eq!(ids(&store), vec!["b"]);

        store.set_search_term("sc");
        assert_eq!(ids(&store), vec!["d"]);
    }

    #[test]
    fn search_does_not_fold_accents() {
        let mut props = catalog();
        props[0].city = "São Paulo".to_string();
        let mut store = PropertyFilterStore::initialize(props);

        store.set_search_term("sao paulo");
        assert!(store.filtered_properties().is_empty());

        store.set_search_term("são paulo");
        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_price_range([250_000.0, 900_000.0]);
        assert_eq!(ids(&store), vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_width_price_range() {
        let mut props = catalog();
        props[2].price = 500_000.0;
        let mut store = PropertyFilterStore::initialize(props);

        store.set_price_range([500_000.0, 500_000.0]);
        assert_eq!(ids(&store), vec!["c"]);
    }

    #[test]
    fn inverted_price_range_is_accepted_and_matches_nothing() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_price_range([900_000.0, 100_000.0]);
        assert!(store.filtered_properties().is_empty());
        assert_eq!(store.price_range(), [900_000.0, 100_000.0]);
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_search_term("listing");
        store.set_property_type("house");
        store.set_bedrooms_min([2]);
        store.set_bathrooms_min([2]);
        store.set_price_range([0.0, 1.0]);
        store.set_status("sold");

        store.reset_filters();
        let once = store.state().clone();
        store.reset_filters();

        assert_eq!(store.state(), &once);
        assert_eq!(once, FilterState::defaults_for(&catalog()));
        assert_eq!(store.filtered_properties().len(), 5);
    }

    #[test]
    fn reset_uses_current_source_not_the_original() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_property_type("house");

        store.replace_source(vec![
            prop("x", PropertyType::Land, PropertyStatus::ForSale, 0, 0, 30_000.0),
            prop("y", PropertyType::Land, PropertyStatus::ForSale, 0, 0, 75_000.0),
        ]);
        store.reset_filters();

        assert_eq!(store.price_range(), [30_000.0, 75_000.0]);
        assert_eq!(ids(&store), vec!["x", "y"]);
    }

    #[test]
    fn replacing_source_rederives_price_range_and_keeps_predicates() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_price_range([0.0, 10.0]);
        store.set_status("forSale");

        let mut refetched = catalog();
        refetched.push(prop("f", PropertyType::House, PropertyStatus::ForSale, 4, 3, 3_500_000.0));
        store.replace_source(refetched);

        assert_eq!(store.price_range(), [100_000.0, 3_500_000.0]);
        assert_eq!(store.status(), "forSale");
        assert_eq!(ids(&store), vec!["a", "b", "e", "f"]);

        store.replace_source(Vec::new());
        assert_eq!(store.price_range(), FALLBACK_PRICE_RANGE);
        assert!(store.filtered_properties().is_empty());
    }

    #[test]
    fn each_active_filter_only_removes() {
        let base = PropertyFilterStore::initialize(catalog());
        let all: Vec<String> = base.filtered_properties().iter().map(|p| p.id.clone()).collect();

        type Step = fn(&mut PropertyFilterStore);
        let steps: [Step; 6] = [
            |s| s.set_search_term("listing d"),
            |s| s.set_property_type("apartment"),
            |s| s.set_bedrooms_min([2]),
            |s| s.set_bathrooms_min([2]),
            |s| s.set_price_range([200_000.0, 1_000_000.0]),
            |s| s.set_status("forSale"),
        ];

        let mut stacked = base.clone();
        let mut previous = all.clone();
        for step in steps {
            let mut single = base.clone();
            step(&mut single);
            assert!(single.filtered_properties().iter().all(|p| all.contains(&p.id)));

            step(&mut stacked);
            let now: Vec<String> = stacked.filtered_properties().iter().map(|p| p.id.clone()).collect();
            assert!(now.iter().all(|id| previous.contains(id)));
            previous = now;
        }
    }

    #[test]
    fn output_is_an_ordered_subsequence_of_source() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_price_range([250_000.0, 2_000_000.0]);
        store.set_bathrooms_min([1]);

        let source: Vec<&str> = store.source().iter().map(|p| p.id.as_str()).collect();
        let mut cursor = 0;
        for id in ids(&store) {
            let pos = source[cursor..]
                .iter()
                .position(|s| *s == id)
                .expect("filtered id must appear later in source");
            cursor += pos + 1;
        }
    }

    #[test]
    fn filtered_view_is_restartable() {
        let mut store = PropertyFilterStore::initialize(catalog());
        store.set_property_type("house");
        let first: Vec<_> = store.filtered_properties().iter().collect();
        let second: Vec<_> = store.filtered_properties().iter().collect();
        assert_eq!(first, second);
    }
}
