pub mod catalog;
pub mod catalog_links;
pub mod dashboard;
pub mod leads;
pub mod properties;
pub mod property_detail;
pub mod proposals;

pub use catalog::{catalog_page, CatalogVm};
pub use catalog_links::catalog_links_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use leads::leads_page;
pub use properties::{properties_page, PropertiesVm};
pub use property_detail::{property_detail_page, PropertyDetailVm};
pub use proposals::{proposal_page, proposals_page, ProposalVm};
