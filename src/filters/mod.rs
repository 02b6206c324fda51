//! Filtered, paginated views over a property collection.

pub mod query;
pub mod scope;
pub mod state;
pub mod store;

pub use query::{paginate, FilterQuery, Page};
pub use scope::FilterScope;
pub use state::{default_price_range, FilterState, ALL};
pub use store::PropertyFilterStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A filter accessor was used before any source collection was attached.
    #[error("filter store used before a property collection was attached")]
    NotInitialized,
}
