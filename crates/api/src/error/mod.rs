//! Error handling for the ecclab ecosystem

pub mod traits;
pub mod types;


pub use traits::ResultExt;
pub use types::{Error, Result};
