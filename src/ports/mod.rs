//! Ports - Interfaces for the external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the intake domain and the outside world. Adapters implement these
//! ports against the real backend; tests use hand-rolled mocks.

mod auth_provider;
mod test_gateway;

pub use auth_provider::{
    AccessToken, AuthError, AuthProvider, Credentials, Registration, UserProfile,
};
pub use test_gateway::{GatewayError, TestGateway};
