use reqwest::Method;

use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum NdauError {
    #[error("failed to build request: {0}")]
    BuildRequest(String),

    #[error("failed to encode parameters: {0}")]
    EncodeParams(String),

    #[error("unsupported method {0} for form parameters; use GET or POST")]
    UnsupportedMethod(Method),

    #[error("transport failure: {0}")]
    Transport(#[source] TransportError),

    /// Non-200 response. The message is the node's status line verbatim,
    /// e.g. `404 Not Found`.
    #[error("{0}")]
    Status(String),

    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}
