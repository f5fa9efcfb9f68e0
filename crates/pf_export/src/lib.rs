pub mod error;
pub mod html;

pub use error::{Error, Result};
pub use html::{render_html, write_html};
