//! NeuroMetrica Client - CSI Test Intake Flow
//!
//! This crate implements the client side of the Coping Strategies Inventory
//! (CSI) administration: the intake state machine, answer validation, and
//! the HTTP gateway to the remote scoring backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
