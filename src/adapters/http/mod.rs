//! HTTP adapters for the NeuroMetrica backend API.
//!
//! Implements the `TestGateway` and `AuthProvider` ports over reqwest,
//! speaking the backend's JSON contract (Spanish field names, `detail`
//! error bodies).

mod auth;
mod detail;
mod test_gateway;

pub use auth::HttpAuthProvider;
pub use detail::extract_detail;
pub use test_gateway::{HttpTestGateway, HttpTestGatewayConfig};
