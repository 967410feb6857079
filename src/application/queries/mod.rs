//! Read-side handlers over the gateway and auth ports.

mod fetch_profile;
mod fetch_results;
mod list_history;

pub use fetch_profile::FetchProfileHandler;
pub use fetch_results::FetchResultsHandler;
pub use list_history::ListHistoryHandler;
