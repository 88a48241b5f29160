//! API request handlers.

mod analyze;
mod results;
mod upload;

pub use analyze::*;
pub use results::*;
pub use upload::*;
