//! Results module - documents produced by the scoring backend.
//!
//! Everything here is read-only to the client: percentiles, levels, and
//! interpretation texts are computed server-side and only mapped to a
//! display encoding.

mod document;
mod history;
mod indicator;

pub use document::{Interpretation, LevelSummary, ResultDocument, ScoringReport};
pub use history::TestSummary;
pub use indicator::{IndicatorCode, IndicatorLevel};
