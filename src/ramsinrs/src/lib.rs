// ramsinrs/src/lib.rs

pub mod cli;
pub mod coerce;
pub mod env;
pub mod error;
pub mod reconcile;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use error::{FieldError, RamsinError, ValidationErrors};
pub use reconcile::reconcile;
pub use validate::validate;
