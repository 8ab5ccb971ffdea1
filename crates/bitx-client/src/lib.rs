/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BitX client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    BasicAuth,
    BitxClient,
    BitxError,
    ClientConfig,
    Config,
    ErrorCode,
    MockTransport,
    OptionsOverride,
    Params,
    ReqwestTransport,
    RequestOptions,
    Result,
    Transport,
    TransportRequest,
    TransportResponse,
    decode,
};

// Re-export all types
pub use types::*;
