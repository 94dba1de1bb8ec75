//! Export module - CSV dumps of an account's tables.

mod export_model;
mod export_service;

#[cfg(test)]
mod export_service_tests;

pub use export_model::ExportTable;
pub use export_service::ExportService;
