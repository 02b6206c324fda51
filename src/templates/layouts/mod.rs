pub mod desktop;
pub mod public;
