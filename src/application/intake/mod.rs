//! Intake flow - drives a test session against the scoring gateway.

mod flow;

pub use flow::IntakeFlow;
