//! Core building blocks shared by the painter and the theme registry
//!
//! Errors, colour parsing and logging setup live here.

pub mod colour;
mod error;
pub mod logging;

pub use colour::Rgb;
pub use error::*;
pub use logging::{init_default_logging, init_logging, LogFormat, LoggingConfig};
