pub mod catalogs;
pub mod connection;
pub mod leads;
pub mod properties;
pub mod proposals;

pub use connection::{init_db, Database};
