//! Filter-and-aggregation engine for the learning analytics dashboard.
//!
//! The engine is synchronous and side-effect free: a dataset is generated (or
//! imported) once, owned by the caller, and every report is a pure function of
//! that dataset plus the caller's active [`analytics::filter::FilterSelection`].

pub mod analytics;
pub mod config;
pub mod error;
pub mod telemetry;
