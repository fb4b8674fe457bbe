pub mod error;
pub mod messages;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::DismissError;
pub use messages::REMOVAL_FAILED_ALERT;
pub use types::{BindStats, DismissOutcome, HIDE_DURATION_MS};
