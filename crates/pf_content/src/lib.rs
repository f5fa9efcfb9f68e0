mod builtin;
pub mod error;
pub mod portfolio;

pub use error::{Error, Result};
pub use portfolio::Portfolio;
