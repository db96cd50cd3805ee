use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Method, Request, Response, StatusCode, Url};

use super::{HttpTransport, TransportError};

/// A mock transport for testing. Records every executed request and answers
/// from a queue of canned outcomes populated via the builder pattern.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<CannedOutcome>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

enum CannedOutcome {
    Response { status: StatusCode, body: Vec<u8> },
    Error(String),
}

/// What the mock captured about one executed request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Vec<u8>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            outcomes: VecDeque::new(),
        }
    }

    /// Snapshot of every request executed so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock request log lock").clone()
    }
}

pub struct MockTransportBuilder {
    outcomes: VecDeque<CannedOutcome>,
}

impl MockTransportBuilder {
    pub fn with_response(mut self, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        self.outcomes.push_back(CannedOutcome::Response {
            status,
            body: body.into(),
        });
        self
    }

    pub fn with_error(mut self, message: &str) -> Self {
        self.outcomes
            .push_back(CannedOutcome::Error(message.to_owned()));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            outcomes: Mutex::new(self.outcomes),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let recorded = RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            body: request
                .body()
                .and_then(reqwest::Body::as_bytes)
                .map(<[u8]>::to_vec),
        };
        self.requests
            .lock()
            .expect("mock request log lock")
            .push(recorded);

        // An exhausted queue answers 200 with an empty body so tests that
        // only inspect the built request do not have to stage outcomes.
        let outcome = self
            .outcomes
            .lock()
            .expect("mock outcome queue lock")
            .pop_front()
            .unwrap_or(CannedOutcome::Response {
                status: StatusCode::OK,
                body: Vec::new(),
            });

        match outcome {
            CannedOutcome::Response { status, body } => {
                let response = http::Response::builder()
                    .status(status)
                    .body(body)
                    .expect("static response parts must build");
                Ok(Response::from(response))
            }
            CannedOutcome::Error(message) => Err(std::io::Error::other(message).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_outcomes_in_order_and_records_requests() {
        let mock = MockTransport::builder()
            .with_response(StatusCode::OK, "first")
            .with_error("connection refused")
            .build();

        let url: Url = "https://node.example/price/current".parse().unwrap();
        let first = mock
            .execute(Request::new(Method::GET, url.clone()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(first.bytes().await.unwrap().as_ref(), b"first");

        let second = mock.execute(Request::new(Method::GET, url)).await;
        let err = second.err().expect("second outcome is an error");
        assert!(err.to_string().contains("connection refused"));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url.path(), "/price/current");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn exhausted_queue_defaults_to_empty_ok() {
        let mock = MockTransport::builder().build();
        let url: Url = "https://node.example/status".parse().unwrap();

        let response = mock.execute(Request::new(Method::GET, url)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.bytes().await.unwrap().is_empty());
    }
}
