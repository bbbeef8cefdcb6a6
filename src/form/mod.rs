//! src/form/mod.rs

mod client;
mod rules;

pub use client::{FormClient, FormOutcome};
pub use rules::FormRules;
