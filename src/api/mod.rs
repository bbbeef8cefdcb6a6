//! src/api/mod.rs

mod delay;
mod error;
mod simple_form;

pub use delay::delay;
pub use error::ApiError;
pub use simple_form::*;
