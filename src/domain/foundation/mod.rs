//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the CSI intake domain.

mod errors;
mod ids;
mod item_number;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::TestId;
pub use item_number::{ItemNumber, ITEM_COUNT};
pub use rating::ResponseRating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
