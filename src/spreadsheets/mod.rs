pub mod export_xlsx;

pub use export_xlsx::properties_workbook;
