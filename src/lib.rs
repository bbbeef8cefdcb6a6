//! src/lib.rs
pub mod api;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod form;
pub mod telemetry;
pub mod validators;
