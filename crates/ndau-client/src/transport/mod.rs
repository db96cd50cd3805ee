//! HTTP transport abstraction.
//!
//! Defines the [`HttpTransport`] trait, implemented for [`reqwest::Client`]
//! in production and by a request-recording test double (`mock::MockTransport`).

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Capability to perform one HTTP exchange.
///
/// Implementations execute the request exactly once: no retries and no
/// timeout enforcement here. Timeout and cancellation policy belong to the
/// supplied implementation (e.g. a `reqwest::Client` built with timeouts,
/// which then fails the exchange like any other transport error).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a fully built request and return the raw response.
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, TransportError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, TransportError> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}
