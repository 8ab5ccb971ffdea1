/*
[INPUT]:  Client configuration, credentials and endpoint parameters
[OUTPUT]: Decoded JSON responses or typed failures
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod request;
pub mod response;
pub mod trade;
pub mod transport;

pub use error::{BitxError, ErrorCode, Result};
pub use request::{BasicAuth, OptionsOverride, Params, RequestOptions};
pub use response::decode;
pub use transport::{
    MockTransport, ReqwestTransport, Transport, TransportRequest, TransportResponse,
};

pub use client::{BitxClient, ClientConfig, Config};
