/*
[INPUT]:  HTTP method, composed URL and request options
[OUTPUT]: Status code and raw body bytes, or a transport failure
[POS]:    HTTP layer - pluggable network collaborator
[UPDATE]: When changing how requests hit the wire or adding transports
*/

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use tracing::debug;

use crate::http::{BitxError, ClientConfig, RequestOptions, Result};

/// Longest slice of an error body quoted in a transport failure message
const ERROR_BODY_PREVIEW: usize = 120;

/// A single request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub options: RequestOptions,
}

/// A completed 2xx exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for the HTTP collaborator performing the actual network exchange
///
/// Implementations must report non-2xx statuses and connection problems as
/// [`BitxError::Transport`]. A client is only as thread safe as its transport.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport with custom timeouts and user agent
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http_client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse> {
        let TransportRequest {
            method,
            url,
            options,
        } = request;
        let url = Url::parse(&url)?;

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .basic_auth(&options.auth.username, Some(&options.auth.password));
        if let Some(query) = options.query.as_ref().filter(|q| !q.is_empty()) {
            builder = builder.query(&query.encoded_pairs());
        }
        if let Some(body) = options.body.as_ref() {
            builder = builder.form(&body.encoded_pairs());
        }

        debug!(method = %method, url = %url, "sending request");
        let response = builder.send().await.map_err(|e| BitxError::Transport {
            message: format!("`{method} {url}` failed: {e}"),
            status: e.status().map(|s| s.as_u16()).unwrap_or(0),
        })?;

        let status = response.status();
        debug!(method = %method, url = %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let kind = if status.is_client_error() {
                "Client error"
            } else if status.is_server_error() {
                "Server error"
            } else {
                "Unexpected status"
            };
            return Err(BitxError::Transport {
                message: format!(
                    "{kind}: `{method} {url}` resulted in a `{status}` response: {}",
                    preview(&text)
                ),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| BitxError::Transport {
            message: format!("`{method} {url}` body could not be read: {e}"),
            status: status.as_u16(),
        })?;

        Ok(TransportResponse::new(status.as_u16(), body.to_vec()))
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((idx, _)) => format!("{} (truncated...)", &text[..idx]),
        None => text.to_string(),
    }
}

/// Canned reply queued on a [`MockTransport`]
#[derive(Debug, Clone)]
enum MockReply {
    Response(TransportResponse),
    Failure { message: String, status: u16 },
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    requests: Vec<TransportRequest>,
}

/// In-memory transport for testing
///
/// Replays queued replies in order and records every request it receives.
/// Clones share the same queue and history.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.lock()
            .replies
            .push_back(MockReply::Response(TransportResponse::new(status, body)));
        self
    }

    /// Queue a transport level failure
    pub fn push_failure(&self, message: impl Into<String>, status: u16) -> &Self {
        self.lock().replies.push_back(MockReply::Failure {
            message: message.into(),
            status,
        });
        self
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.lock().requests.clone()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.lock().requests.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_reply(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut state = self.lock();
        let description = format!("{} {}", request.method, request.url);
        state.requests.push(request);
        match state.replies.pop_front() {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure { message, status }) => {
                Err(BitxError::Transport { message, status })
            }
            None => Err(BitxError::Transport {
                message: format!("no mock response queued for `{description}`"),
                status: 0,
            }),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.next_reply(request)
    }
}
