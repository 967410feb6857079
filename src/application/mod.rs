//! Application layer - flows and query handlers.
//!
//! This layer orchestrates domain operations and coordinates with ports.
//! The intake flow drives the write path; the query handlers are thin
//! read paths over the gateway and auth ports.

pub mod intake;
pub mod queries;

pub use intake::IntakeFlow;
pub use queries::{
    FetchProfileHandler, FetchResultsHandler, ListHistoryHandler,
};
