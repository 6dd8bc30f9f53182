use std::time::Duration;

use async_trait::async_trait;
use tracing::{field, Instrument};

use crate::config::ServiceUrl;

use super::{LookupError, UserLookup};

/// Simulated round trip to the user service.
pub const USER_LOOKUP_LATENCY: Duration = Duration::from_millis(25);

/// Client for the user service.
///
/// The request URL is resolved from the configured base URL on every call but
/// never dialed; the answer is simulated. Any positive id exists.
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    base_url: ServiceUrl,
    latency: Duration,
}

impl UserServiceClient {
    pub fn new(base_url: impl Into<ServiceUrl>) -> Self {
        Self {
            base_url: base_url.into(),
            latency: USER_LOOKUP_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn user_url(&self, user_id: i64) -> String {
        format!("{}/users/{}", self.base_url.resolve(), user_id)
    }
}

#[async_trait]
impl UserLookup for UserServiceClient {
    async fn lookup_user(&self, user_id: i64) -> Result<(), LookupError> {
        let span = tracing::info_span!(
            "call-user-service",
            external.service = "user-service",
            user.id = user_id,
            http.url = %self.user_url(user_id),
            outcome = field::Empty,
            error = field::Empty,
        );

        async {
            tokio::time::sleep(self.latency).await;

            let span = tracing::Span::current();
            if user_id <= 0 {
                span.record("outcome", "not_found");
                span.record("error", "invalid user");
                tracing::debug!(user_id, "User lookup failed");
                return Err(LookupError::UserNotFound(user_id));
            }

            span.record("outcome", "found");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
