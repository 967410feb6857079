//! FetchProfileHandler - reads the authenticated user's profile.

use std::sync::Arc;

use crate::ports::{AccessToken, AuthError, AuthProvider, UserProfile};

/// Handler for fetching the logged-in user's profile.
pub struct FetchProfileHandler {
    auth: Arc<dyn AuthProvider>,
}

impl FetchProfileHandler {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }

    pub async fn handle(&self, token: &AccessToken) -> Result<UserProfile, AuthError> {
        tracing::debug!("fetching user profile");
        self.auth.fetch_profile(token).await
    }
}
