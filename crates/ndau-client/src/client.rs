//! The ndau client handle and its request dispatcher.
//!
//! Parameters are passed as a [`serde_json::Value`] and the encoding path is
//! chosen by their runtime shape: objects become url-encoded forms (query
//! string for GET, body for POST), arrays become a JSON POST body, and
//! anything else sends no parameters at all. The dispatcher returns the raw
//! response bytes; decoding is the caller's job.

use std::sync::Arc;

use reqwest::{Body, Method, Request, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error};
use url::form_urlencoded;
use uuid::Uuid;

use crate::error::NdauError;
use crate::transport::HttpTransport;

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct NdauConfig {
    /// Network identifier, e.g. `mainnet` or `testnet`. Informational only;
    /// it is never sent to the node.
    pub network: String,
    /// Base URL of the node API. Paths passed to the dispatch methods are
    /// appended to it verbatim.
    pub node_api: String,
}

/// Handle for the ndau node API.
///
/// Holds the transport and configuration behind `Arc`s, so clones are cheap
/// and one handle may serve concurrent callers; no mutable state is shared
/// between calls.
#[derive(Clone)]
pub struct Ndau {
    transport: Arc<dyn HttpTransport>,
    config: Arc<NdauConfig>,
}

impl Ndau {
    /// Create a new client handle.
    ///
    /// Cannot fail under current logic; the `Result` is kept for forward
    /// compatibility of the constructor signature.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: Arc<NdauConfig>,
    ) -> Result<Self, NdauError> {
        debug!(network = %config.network, node_api = %config.node_api, "new ndau client");
        Ok(Self { transport, config })
    }

    /// Issue a GET query under a fresh tracking id.
    pub async fn get_data(&self, path: &str, params: &Value) -> Result<Vec<u8>, NdauError> {
        self.dispatch(Method::GET, path, params, Uuid::new_v4())
            .await
    }

    /// Issue a POST query under a fresh tracking id.
    pub async fn post_data(&self, path: &str, params: &Value) -> Result<Vec<u8>, NdauError> {
        self.dispatch(Method::POST, path, params, Uuid::new_v4())
            .await
    }

    /// Build a request for `path`, execute it, and return the response body.
    ///
    /// `tracking` is a per-call correlation id that only appears in log
    /// lines; it carries no protocol meaning and is not sent to the node.
    ///
    /// A non-200 response is an error whose message is the status line; the
    /// body is only read on 200.
    pub async fn dispatch(
        &self,
        method: Method,
        path: &str,
        params: &Value,
        tracking: Uuid,
    ) -> Result<Vec<u8>, NdauError> {
        let request = self.build_request(method, path, params, tracking)?;
        debug!(
            %tracking,
            method = %request.method(),
            url = %request.url(),
            "dispatch"
        );

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                error!(%tracking, error = %err, "transport failure");
                return Err(NdauError::Transport(err));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            error!(%tracking, %status, "node api returned non-200 status");
            return Err(NdauError::Status(status.to_string()));
        }

        match response.bytes().await {
            Ok(body) => Ok(body.to_vec()),
            Err(err) => {
                error!(%tracking, error = %err, "failed to read response body");
                Err(NdauError::ReadBody(err))
            }
        }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        params: &Value,
        tracking: Uuid,
    ) -> Result<Request, NdauError> {
        let endpoint = format!("{}{}", self.config.node_api, path);
        let url = Url::parse(&endpoint).map_err(|e| {
            error!(%tracking, %endpoint, error = %e, "failed to build request");
            NdauError::BuildRequest(format!("invalid endpoint `{endpoint}`: {e}"))
        })?;

        match params {
            Value::Object(map) if !map.is_empty() => {
                let encoded = encode_form(map);
                match method {
                    Method::GET => {
                        let mut url = url;
                        url.set_query(Some(&encoded));
                        Ok(Request::new(Method::GET, url))
                    }
                    Method::POST => {
                        let mut request = Request::new(Method::POST, url);
                        *request.body_mut() = Some(Body::from(encoded));
                        Ok(request)
                    }
                    other => {
                        error!(%tracking, method = %other, "unsupported method for form parameters");
                        Err(NdauError::UnsupportedMethod(other))
                    }
                }
            }
            Value::Array(_) => {
                // The node expects array-shaped parameters as a JSON POST
                // body, so the caller's verb is overridden here.
                if method != Method::POST {
                    debug!(%tracking, requested = %method, "array parameters force POST");
                }
                let body = serde_json::to_vec(params).map_err(|e| {
                    error!(%tracking, error = %e, "failed to encode array parameters");
                    NdauError::EncodeParams(e.to_string())
                })?;
                let mut request = Request::new(Method::POST, url);
                *request.body_mut() = Some(Body::from(body));
                Ok(request)
            }
            // Null, scalars, and empty objects: given verb, no query, no body.
            _ => Ok(Request::new(method, url)),
        }
    }
}

/// Url-encode a parameter map. The same encoder output is used for GET query
/// strings and POST bodies, so the two wire forms are always identical.
fn encode_form(map: &serde_json::Map<String, Value>) -> String {
    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for (key, value) in map {
        encoded.append_pair(key, &form_value(value));
    }
    encoded.finish()
}

/// Default string conversion for a parameter value.
///
/// Strings are used bare; every other shape falls back to its JSON text form
/// so that no parameter is ever silently dropped.
fn form_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
