mod catalog_tests;
mod leads_tests;
mod properties_tests;
mod proposals_tests;
