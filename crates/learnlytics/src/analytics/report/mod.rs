mod insights;
mod summary;
pub mod views;

pub use summary::DashboardReport;
