/*
[INPUT]:  Base URL, API version, credentials and an HTTP transport
[OUTPUT]: Configured client exposing the four primitive HTTP verbs
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::http::Result;
use crate::http::request::{self, BasicAuth, OptionsOverride, Params, RequestOptions};
use crate::http::response::interpret;
use crate::http::transport::{ReqwestTransport, Transport, TransportRequest};

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.mybitx.com";
/// Default API version segment
pub const DEFAULT_API_VERSION: &str = "1";

/// Endpoint location and credentials
///
/// `base_url` never ends with `/`. No other validation is done: empty
/// strings are accepted as given.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url", deserialize_with = "deserialize_base_url")]
    base_url: String,
    #[serde(default = "default_api_version", alias = "version")]
    api_version: String,
    #[serde(default)]
    key: String,
    #[serde(default)]
    secret: String,
}

impl Config {
    /// Create a config for the default host and version
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Set the base URL, trimming trailing slashes
    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.set_base_url(url);
        self
    }

    /// Set the API version segment
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.set_version(version);
        self
    }

    pub fn set_base_url(&mut self, url: impl AsRef<str>) {
        self.base_url = normalize_base_url(url.as_ref());
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.api_version = version.into();
    }

    pub fn set_auth(&mut self, key: impl Into<String>, secret: impl Into<String>) {
        self.key = key.into();
        self.secret = secret.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Credentials as a basic auth pair
    pub fn basic_auth(&self) -> BasicAuth {
        BasicAuth::new(self.key.clone(), self.secret.clone())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn deserialize_base_url<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    let url = String::deserialize(deserializer)?;
    Ok(normalize_base_url(&url))
}

/// HTTP client configuration for the default reqwest transport
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("bitx-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Main client for the BitX API
///
/// Cloning is cheap; clones share the transport but own their config.
/// Concurrent use is as safe as the underlying [`Transport`].
#[derive(Debug, Clone)]
pub struct BitxClient {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl BitxClient {
    /// Create a client for the default host using a reqwest transport
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(key, secret), ClientConfig::default())
    }

    /// Create a client with custom endpoint config and HTTP settings
    pub fn with_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::with_config(&client_config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    /// Set the base URL; trailing slashes are trimmed
    pub fn set_url(&mut self, url: impl AsRef<str>) -> &mut Self {
        self.config.set_base_url(url);
        self
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.config.set_version(version);
        self
    }

    pub fn set_auth(&mut self, key: impl Into<String>, secret: impl Into<String>) -> &mut Self {
        self.config.set_auth(key, secret);
        self
    }

    pub fn set_transport(&mut self, transport: impl Transport + 'static) -> &mut Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn version(&self) -> &str {
        self.config.api_version()
    }

    pub fn key(&self) -> &str {
        self.config.key()
    }

    /// Full URL for an API path, e.g. `/ticker` -> `{base}/api/{version}/ticker`
    pub fn build_url(&self, path: &str) -> String {
        request::build_url(&self.config, path)
    }

    /// Request options with the client credentials as default auth
    pub fn build_options(&self, extra: OptionsOverride) -> RequestOptions {
        request::build_options(&self.config, extra)
    }

    /// GET with `params` as query string
    pub async fn get(&self, path: &str, params: Params) -> Result<Value> {
        let url = self.build_url(path);
        let options = self.build_options(OptionsOverride::new().query(params));
        self.request(Method::GET, url, options).await
    }

    /// POST with `params` as form body
    pub async fn post(&self, path: &str, params: Params) -> Result<Value> {
        let url = self.build_url(path);
        let options = self.build_options(OptionsOverride::new().body(params));
        self.request(Method::POST, url, options).await
    }

    /// PUT with `params` as form body
    pub async fn put(&self, path: &str, params: Params) -> Result<Value> {
        let url = self.build_url(path);
        let options = self.build_options(OptionsOverride::new().body(params));
        self.request(Method::PUT, url, options).await
    }

    /// DELETE with `params` as query string
    pub async fn delete(&self, path: &str, params: Params) -> Result<Value> {
        let url = self.build_url(path);
        let options = self.build_options(OptionsOverride::new().query(params));
        self.request(Method::DELETE, url, options).await
    }

    async fn request(&self, method: Method, url: String, options: RequestOptions) -> Result<Value> {
        debug!(method = %method, url = %url, "dispatching API call");
        let response = self
            .transport
            .perform(TransportRequest {
                method,
                url,
                options,
            })
            .await?;
        interpret(&response)
    }
}
