//! Request handlers, one module per area of the CRM.

pub mod catalog;
pub mod dashboard;
pub mod leads;
pub mod properties;
pub mod proposals;

use crate::domain::Property;
use crate::errors::ServerError;
use crate::filters::{FilterQuery, FilterScope, FilterState, PropertyFilterStore};

/// Mounts `properties` in `scope` and layers each query over the defaults, in order.
pub(crate) fn mount_filtered(
    scope: &mut FilterScope,
    properties: Vec<Property>,
    queries: &[&FilterQuery],
) -> Result<(), ServerError> {
    scope.mount(properties);

    let store = scope.store_mut()?;
    for query in queries {
        query.apply(store);
    }
    Ok(())
}

/// The non-default predicates of `store`, for links that must reproduce the view.
pub(crate) fn active_query(store: &PropertyFilterStore) -> FilterQuery {
    let defaults = FilterState::defaults_for(store.source());
    FilterQuery::from_state(store.state(), &defaults)
}
