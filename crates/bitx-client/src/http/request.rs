/*
[INPUT]:  Client config, endpoint path and per-call parameters
[OUTPUT]: Full request URL and request options (auth + query/body payload)
[POS]:    HTTP layer - request building pipeline
[UPDATE]: When changing URL layout, auth injection or payload encoding
*/

use std::fmt;

use url::form_urlencoded;

use crate::http::Config;

/// Compose `{base_url}/api/{version}/{path}`.
///
/// Leading slashes on `path` are stripped; anything else, including an
/// embedded query string, passes through verbatim.
pub fn build_url(config: &Config, path: &str) -> String {
    format!(
        "{}/api/{}/{}",
        config.base_url(),
        config.api_version(),
        path.trim_start_matches('/')
    )
}

/// Merge per-call options over the default basic auth pair.
///
/// Shallow, last writer wins: a supplied `auth` replaces the default pair.
pub fn build_options(config: &Config, extra: OptionsOverride) -> RequestOptions {
    RequestOptions {
        auth: extra.auth.unwrap_or_else(|| config.basic_auth()),
        query: extra.query,
        body: extra.body,
    }
}

/// HTTP basic authentication pair
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Options handed to the transport for a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub auth: BasicAuth,
    /// Appended to the URL query string (GET, DELETE)
    pub query: Option<Params>,
    /// Sent form-encoded (POST, PUT)
    pub body: Option<Params>,
}

/// Per-call options merged on top of the defaults by [`build_options`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsOverride {
    pub auth: Option<BasicAuth>,
    pub query: Option<Params>,
    pub body: Option<Params>,
}

impl OptionsOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth(mut self, auth: BasicAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn query(mut self, params: Params) -> Self {
        self.query = Some(params);
        self
    }

    pub fn body(mut self, params: Params) -> Self {
        self.body = Some(params);
        self
    }
}

/// Ordered request parameters.
///
/// A `None` value is kept and encoded as an empty parameter (`key=`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, Option<String>)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.0.push((key.into(), Some(value.to_string())));
        self
    }

    /// Append a parameter that may be absent
    pub fn with_opt<V: fmt::Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.0.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Value for `key`: `None` if not present, `Some(None)` if present but null
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Pairs ready for url encoding, nulls rendered as empty strings
    pub fn encoded_pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref().unwrap_or("")))
            .collect()
    }

    /// `application/x-www-form-urlencoded` rendering
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.encoded_pairs())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config() -> Config {
        Config::new("foo", "bar")
    }

    #[rstest]
    #[case("/foo", "https://api.mybitx.com/api/1/foo")]
    #[case("/foo/bar", "https://api.mybitx.com/api/1/foo/bar")]
    #[case("foo/bar", "https://api.mybitx.com/api/1/foo/bar")]
    #[case("foo?baz=qux", "https://api.mybitx.com/api/1/foo?baz=qux")]
    #[case("//foo", "https://api.mybitx.com/api/1/foo")]
    fn test_build_url_defaults(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(build_url(&config(), path), expected);
    }

    #[test]
    fn test_build_url_follows_version_and_base_url() {
        let mut config = config();
        config.set_version("2");
        assert_eq!(build_url(&config, "/foo"), "https://api.mybitx.com/api/2/foo");

        config.set_base_url("http://www.example.com");
        assert_eq!(build_url(&config, "/foo"), "http://www.example.com/api/2/foo");

        config.set_base_url("http://www.example.com/");
        assert_eq!(build_url(&config, "/foo"), "http://www.example.com/api/2/foo");
    }

    #[test]
    fn test_build_options_defaults_to_auth_only() {
        let options = build_options(&config(), OptionsOverride::new());
        assert_eq!(
            options,
            RequestOptions {
                auth: BasicAuth::new("foo", "bar"),
                query: None,
                body: None,
            }
        );
    }

    #[test]
    fn test_build_options_keeps_extra_options() {
        let params: Params = [("baz", "qux")].into_iter().collect();
        let options = build_options(&config(), OptionsOverride::new().query(params.clone()));
        assert_eq!(options.auth, BasicAuth::new("foo", "bar"));
        assert_eq!(options.query, Some(params));
        assert_eq!(options.body, None);
    }

    #[test]
    fn test_build_options_auth_override_replaces_default() {
        let options = build_options(
            &config(),
            OptionsOverride::new().auth(BasicAuth::new("other", "pair")),
        );
        assert_eq!(options.auth, BasicAuth::new("other", "pair"));
    }

    #[test]
    fn test_params_keep_order_and_nulls() {
        let params = Params::new()
            .with("asset", "XBT")
            .with_opt("address", None::<&str>)
            .with("limit", 10);

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("asset"), Some(Some("XBT")));
        assert_eq!(params.get("address"), Some(None));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.to_query_string(), "asset=XBT&address=&limit=10");
    }

    #[test]
    fn test_params_encoding_escapes_values() {
        let params = Params::new().with("description", "coffee & cake");
        assert_eq!(params.to_query_string(), "description=coffee+%26+cake");
    }

    #[test]
    fn test_basic_auth_debug_redacts_password() {
        let rendered = format!("{:?}", BasicAuth::new("key", "s3cr3t"));
        assert!(rendered.contains("key"));
        assert!(!rendered.contains("s3cr3t"));
    }
}
