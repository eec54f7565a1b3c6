//! CLI library components for the GTFS validator.

pub mod commands;
pub mod logging;
pub mod summary;
