// Common utilities and shared code

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
