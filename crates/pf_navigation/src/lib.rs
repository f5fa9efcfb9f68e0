pub mod error;
pub mod menu;
pub mod navigation;
pub mod page;
pub mod scroll;
pub mod section;
pub mod viewport;

pub use error::{Error, Result};
