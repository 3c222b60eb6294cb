//! tk-core: ids, numeric limits and the shared error type for tankflow.

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{TkError, TkResult};
pub use ids::*;
pub use numeric::*;
