// src/filters/scope.rs

use crate::domain::Property;
use crate::filters::store::PropertyFilterStore;
use crate::filters::FilterError;

/// View-scoped slot that owns at most one filter store.
///
/// A view mounts the store when it starts rendering and hands `&mut FilterScope`
/// to whatever nested piece needs the filters. Reaching for the store before it
/// is mounted is an integration bug and is reported as such.
#[derive(Debug, Default)]
pub struct FilterScope {
    store: Option<PropertyFilterStore>,
}

impl FilterScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a fresh store to `properties`, replacing any previous one.
    pub fn mount(&mut self, properties: Vec<Property>) -> &mut PropertyFilterStore {
        self.store.insert(PropertyFilterStore::initialize(properties))
    }

    #[allow(dead_code)]
    pub fn unmount(&mut self) {
        self.store = None;
    }

    pub fn store(&self) -> Result<&PropertyFilterStore, FilterError> {
        self.store.as_ref().ok_or(FilterError::NotInitialized)
    }

    pub fn store_mut(&mut self) -> Result<&mut PropertyFilterStore, FilterError> {
        self.store.as_mut().ok_or(FilterError::NotInitialized)
    }
}
