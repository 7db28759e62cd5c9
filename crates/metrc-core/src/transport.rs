//! Authenticated transport for the Metrc REST API.
//!
//! [`Transport`] is the seam every resource accessor talks through: a single
//! `execute` primitive parameterized by verb, with `get`/`post`/`put`/`delete`
//! provided on top. [`HttpTransport`] is the production implementation backed by
//! `reqwest`; tests substitute an in-memory fake.

use crate::client::ClientConfig;
use crate::config::MetrcConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("metrc-rust/", env!("CARGO_PKG_VERSION"));
const JSON: &str = "application/json";

/// HTTP verb used by a [`TransportRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read
    Get,
    /// Create
    Post,
    /// Update
    Put,
    /// Delete
    Delete,
}

impl Method {
    /// Upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb carry a JSON body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A single call against the Metrc API.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP verb
    pub method: Method,
    /// Endpoint relative to the base origin, including any query string
    pub endpoint: String,
    /// Serialized JSON body for write verbs
    pub body: Option<Bytes>,
    /// Per-call deadline overriding the client-wide timeout
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Create a request without a body.
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            timeout: None,
        }
    }

    /// Attach a serialized body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a per-call deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Capability to send a request to Metrc and receive the raw response body.
///
/// Implementations must treat anything other than HTTP 200 as an error and must not
/// retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the response body.
    async fn execute(&self, request: TransportRequest) -> Result<Bytes>;

    /// `GET` an endpoint.
    async fn get(&self, endpoint: &str) -> Result<Bytes> {
        self.execute(TransportRequest::new(Method::Get, endpoint)).await
    }

    /// `POST` a JSON body to an endpoint.
    async fn post(&self, endpoint: &str, body: Bytes) -> Result<Bytes> {
        self.execute(TransportRequest::new(Method::Post, endpoint).with_body(body)).await
    }

    /// `PUT` a JSON body to an endpoint.
    async fn put(&self, endpoint: &str, body: Bytes) -> Result<Bytes> {
        self.execute(TransportRequest::new(Method::Put, endpoint).with_body(body)).await
    }

    /// `DELETE` an endpoint.
    async fn delete(&self, endpoint: &str) -> Result<Bytes> {
        self.execute(TransportRequest::new(Method::Delete, endpoint)).await
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    config: MetrcConfig,
    http_config: ClientConfig,
}

impl HttpTransportBuilder {
    /// Create a new builder from a [`MetrcConfig`].
    #[must_use]
    pub fn new(config: MetrcConfig) -> Self {
        let http_config = ClientConfig::new()
            .with_timeout(config.timeout())
            .with_connect_timeout(config.connect_timeout());

        Self {
            config,
            http_config,
        }
    }

    /// Override the HTTP client configuration used when building the transport.
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Finalise the builder and create the [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be built.
    pub fn build(self) -> Result<HttpTransport> {
        self.config.check()?;
        let base_url = self.config.parse_base_url()?;
        let http_config = self.http_config;

        let mut builder = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(http_config.timeout)
            .connect_timeout(http_config.connect_timeout)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .gzip(http_config.enable_compression);

        if !self.config.tls_verify {
            warn!("TLS verification disabled for Metrc client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|err| {
            Error::ConfigError(format!("Failed to build Metrc HTTP client: {err}"))
        })?;

        Ok(HttpTransport {
            http,
            base_url,
            vendor_key: self.config.vendor_key,
            user_key: self.config.user_key,
        })
    }
}

/// `reqwest`-backed [`Transport`] attaching HTTP Basic Authentication to every call.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    vendor_key: SecretString,
    user_key: SecretString,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Construct a transport directly from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &MetrcConfig) -> Result<Self> {
        HttpTransportBuilder::new(config.clone()).build()
    }

    /// Start a builder pre-populated with the provided configuration.
    #[must_use]
    pub fn builder(config: MetrcConfig) -> HttpTransportBuilder {
        HttpTransportBuilder::new(config)
    }

    /// Base origin every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint as `origin + "/" + endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] for absolute URLs, whitespace or control
    /// characters, or anything the URL parser rejects.
    pub fn build_url(&self, endpoint: &str) -> Result<Url> {
        if endpoint.contains("://") {
            return Err(Error::InvalidEndpoint(format!(
                "endpoint `{endpoint}` must be relative to the base origin"
            )));
        }
        if endpoint
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(Error::InvalidEndpoint(format!(
                "endpoint {endpoint:?} contains whitespace or control characters"
            )));
        }

        let origin = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{origin}/{endpoint}")).map_err(|err| {
            Error::InvalidEndpoint(format!("Failed to build URL for `{endpoint}`: {err}"))
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<Bytes> {
        let url = self.build_url(&request.endpoint)?;
        let method = request.method;
        let endpoint = request.endpoint;

        let mut builder = self
            .http
            .request(method.into(), url)
            .basic_auth(
                self.vendor_key.expose_secret(),
                Some(self.user_key.expose_secret()),
            )
            .header(ACCEPT, JSON);

        if method.has_body() {
            builder = builder
                .header(CONTENT_TYPE, JSON)
                .body(request.body.unwrap_or_default());
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        debug!(%method, endpoint = %endpoint, "Sending Metrc request");

        let response = builder.send().await?;
        let status = response.status();

        let body = response.bytes().await.map_err(|err| {
            if err.is_timeout() {
                Error::Timeout(format!("Reading Metrc response for `{endpoint}`: {err}"))
            } else {
                Error::ReadError(format!(
                    "Failed to read Metrc response for `{endpoint}`: {err}"
                ))
            }
        })?;

        debug!(
            %method,
            endpoint = %endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            "Received Metrc response"
        );

        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    mock! {
        pub Wire {}

        #[async_trait]
        impl Transport for Wire {
            async fn execute(&self, request: TransportRequest) -> Result<Bytes>;
        }
    }

    fn transport(base_url: &str) -> HttpTransport {
        let config = MetrcConfig::new(base_url, "V", "U").unwrap();
        HttpTransport::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn provided_verbs_delegate_to_execute() {
        let mut wire = MockWire::new();
        wire.expect_execute()
            .with(eq(TransportRequest::new(Method::Get, "facilities/v1")))
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"[]")));
        wire.expect_execute()
            .with(eq(
                TransportRequest::new(Method::Post, "items/v1/create").with_body("[{}]"),
            ))
            .times(1)
            .returning(|_| Ok(Bytes::new()));
        wire.expect_execute()
            .with(eq(
                TransportRequest::new(Method::Put, "sales/v1/receipts").with_body("[]"),
            ))
            .times(1)
            .returning(|_| Ok(Bytes::new()));
        wire.expect_execute()
            .with(eq(TransportRequest::new(Method::Delete, "items/v1/7")))
            .times(1)
            .returning(|_| Ok(Bytes::new()));

        assert_eq!(
            wire.get("facilities/v1").await.unwrap(),
            Bytes::from_static(b"[]")
        );
        wire.post("items/v1/create", Bytes::from_static(b"[{}]"))
            .await
            .unwrap();
        wire.put("sales/v1/receipts", Bytes::from_static(b"[]"))
            .await
            .unwrap();
        wire.delete("items/v1/7").await.unwrap();
    }

    #[tokio::test]
    async fn get_attaches_basic_auth_and_returns_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/facilities/v1"))
            .and(header("authorization", "Basic VjpV"))
            .and(header("accept", "application/json"))
            .and(|req: &Request| !req.headers.contains_key("content-type"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"Id":1}]"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = transport(&server.uri()).get("facilities/v1").await.unwrap();
        assert_eq!(body, Bytes::from_static(br#"[{"Id":1}]"#));
    }

    #[tokio::test]
    async fn post_sends_json_content_type_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/strains/v1/create"))
            .and(query_param("licenseNumber", "C12-1000006-LIC"))
            .and(header("content-type", "application/json"))
            .and(header("authorization", "Basic VjpV"))
            .and(body_json(serde_json::json!([{"Name": "Spring Hill Kush"}])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let body = transport(&server.uri())
            .post(
                "strains/v1/create?licenseNumber=C12-1000006-LIC",
                Bytes::from_static(br#"[{"Name":"Spring Hill Kush"}]"#),
            )
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn put_with_empty_body_still_sets_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/packages/v1/change/note"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        transport(&server.uri())
            .execute(TransportRequest::new(Method::Put, "packages/v1/change/note"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_200_status_embeds_code_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/facilities/v1"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"Message":"unauthorized"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = transport(&server.uri())
            .get("facilities/v1")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::Status {
                status: 401,
                body: r#"{"Message":"unauthorized"}"#.to_string()
            }
        );
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("unauthorized"));
    }

    #[tokio::test]
    async fn other_success_codes_are_errors() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/items/v1/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let err = transport(&server.uri())
            .delete("items/v1/5")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(204));
    }

    #[tokio::test]
    async fn invalid_endpoint_fails_before_sending() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let transport = transport(&server.uri());

        let err = transport.get("items/v1/\nactive").await.unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));

        let err = transport
            .get("https://example.com/items/v1/active")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[tokio::test]
    async fn per_call_timeout_is_enforced() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/facilities/v1"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let err = transport(&server.uri())
            .execute(
                TransportRequest::new(Method::Get, "facilities/v1")
                    .with_timeout(Some(Duration::from_millis(100))),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Timeout(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let err = transport("http://127.0.0.1:1")
            .get("facilities/v1")
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn build_url_joins_origin_and_endpoint() {
        let transport = transport("https://sandbox-api-ca.metrc.com/");
        let url = transport
            .build_url("items/v1/active?licenseNumber=C12-1000006-LIC")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://sandbox-api-ca.metrc.com/items/v1/active?licenseNumber=C12-1000006-LIC"
        );
    }

    #[test]
    fn debug_does_not_leak_credentials() {
        let transport = transport("https://sandbox-api-ca.metrc.com");
        let rendered = format!("{transport:?}");
        assert!(rendered.contains("sandbox-api-ca.metrc.com"));
        assert!(!rendered.contains("VjpV"));
    }

    #[test]
    fn method_names_and_bodies() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
    }
}
