//! Entry point tying the resource accessors to a [`Transport`].

use crate::facilities::Facilities;
use crate::filters::LastModified;
use crate::harvests::Harvests;
use crate::items::Items;
use crate::lab_tests::LabTests;
use crate::locations::Locations;
use crate::packages::Packages;
use crate::plant_batches::PlantBatches;
use crate::plants::Plants;
use crate::sales::Sales;
use crate::strains::Strains;
use crate::transfers::Transfers;
use crate::units_of_measure::UnitsOfMeasure;
use crate::Result;
use bytes::Bytes;
use metrc_core::client::ClientConfig;
use metrc_core::query::QueryParams;
use metrc_core::{Error, HttpTransport, MetrcConfig, Method, Transport, TransportRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Builder for [`MetrcClient`].
#[derive(Debug, Clone)]
pub struct MetrcClientBuilder {
    config: MetrcConfig,
    http_config: Option<ClientConfig>,
    request_timeout: Option<Duration>,
}

impl MetrcClientBuilder {
    /// Create a new builder from a [`MetrcConfig`].
    #[must_use]
    pub fn new(config: MetrcConfig) -> Self {
        Self {
            config,
            http_config: None,
            request_timeout: None,
        }
    }

    /// Override the HTTP client configuration used by the transport.
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = Some(http_config);
        self
    }

    /// Apply a deadline to every call issued by the client.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Finalise the builder and create the [`MetrcClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<MetrcClient> {
        let mut transport = HttpTransport::builder(self.config);
        if let Some(http_config) = self.http_config {
            transport = transport.with_http_config(http_config);
        }

        Ok(MetrcClient {
            transport: Arc::new(transport.build()?),
            request_timeout: self.request_timeout,
        })
    }
}

/// Asynchronous client for the Metrc API.
///
/// Cloning is cheap; clones share the same transport and connection pool.
#[derive(Clone)]
pub struct MetrcClient {
    transport: Arc<dyn Transport>,
    request_timeout: Option<Duration>,
}

impl fmt::Debug for MetrcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetrcClient")
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl MetrcClient {
    /// Construct a client backed by [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &MetrcConfig) -> Result<Self> {
        MetrcClientBuilder::new(config.clone()).build()
    }

    /// Start a builder pre-populated with the provided configuration.
    #[must_use]
    pub fn builder(config: MetrcConfig) -> MetrcClientBuilder {
        MetrcClientBuilder::new(config)
    }

    /// Construct a client over any [`Transport`].
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            request_timeout: None,
        }
    }

    /// Return a client applying `timeout` to every call it issues.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Facilities available to the user key.
    #[must_use]
    pub fn facilities(&self) -> Facilities<'_> {
        Facilities::new(self)
    }

    /// Harvest batches.
    #[must_use]
    pub fn harvests(&self) -> Harvests<'_> {
        Harvests::new(self)
    }

    /// Items (products).
    #[must_use]
    pub fn items(&self) -> Items<'_> {
        Items::new(self)
    }

    /// Lab tests.
    #[must_use]
    pub fn lab_tests(&self) -> LabTests<'_> {
        LabTests::new(self)
    }

    /// Locations (rooms).
    #[must_use]
    pub fn locations(&self) -> Locations<'_> {
        Locations::new(self)
    }

    /// Packages.
    #[must_use]
    pub fn packages(&self) -> Packages<'_> {
        Packages::new(self)
    }

    /// Plant batches.
    #[must_use]
    pub fn plant_batches(&self) -> PlantBatches<'_> {
        PlantBatches::new(self)
    }

    /// Individually tagged plants.
    #[must_use]
    pub fn plants(&self) -> Plants<'_> {
        Plants::new(self)
    }

    /// Sales receipts and transactions.
    #[must_use]
    pub fn sales(&self) -> Sales<'_> {
        Sales::new(self)
    }

    /// Strains.
    #[must_use]
    pub fn strains(&self) -> Strains<'_> {
        Strains::new(self)
    }

    /// Transfers and transfer templates.
    #[must_use]
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(self)
    }

    /// Units of measure.
    #[must_use]
    pub fn units_of_measure(&self) -> UnitsOfMeasure<'_> {
        UnitsOfMeasure::new(self)
    }

    pub(crate) async fn get_json<T>(&self, endpoint: &str, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self
            .execute(TransportRequest::new(Method::Get, endpoint))
            .await
            .map_err(|err| err.context(context))?;

        serde_json::from_slice(&body).map_err(|err| {
            Error::DeserializationError(format!(
                "Failed to parse Metrc response for `{endpoint}`: {err}"
            ))
            .context(context)
        })
    }

    /// Fetch `path?licenseNumber=...` narrowed by last-modified bounds.
    pub(crate) async fn get_modified<T>(
        &self,
        path: &str,
        license_number: &str,
        last_modified: LastModified,
        context: &str,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut params = required_license(license_number);
        last_modified.apply(&mut params);
        self.get_json(&params.append_to(path), context).await
    }

    pub(crate) async fn send_json<B>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &B,
        context: &str,
    ) -> Result<Bytes>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(|err| {
            Error::SerializationError(format!(
                "Failed to encode request for `{endpoint}`: {err}"
            ))
            .context(context)
        })?;

        self.execute(TransportRequest::new(method, endpoint).with_body(body))
            .await
            .map_err(|err| err.context(context))
    }

    /// Send `records` to `path?licenseNumber=...`.
    pub(crate) async fn send_licensed<B>(
        &self,
        method: Method,
        path: &str,
        license_number: &str,
        records: &[B],
        context: &str,
    ) -> Result<Bytes>
    where
        B: Serialize + Sync,
    {
        let endpoint = required_license(license_number).append_to(path);
        self.send_json(method, &endpoint, records, context).await
    }

    pub(crate) async fn delete(&self, endpoint: &str, context: &str) -> Result<Bytes> {
        self.execute(TransportRequest::new(Method::Delete, endpoint))
            .await
            .map_err(|err| err.context(context))
    }

    async fn execute(&self, request: TransportRequest) -> Result<Bytes> {
        trace!(method = %request.method, endpoint = %request.endpoint, "Dispatching Metrc call");
        let request = request.with_timeout(self.request_timeout);
        self.transport.execute(request).await
    }
}

/// Query carrying an optional `licenseNumber`.
pub(crate) fn license(license_number: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_opt("licenseNumber", license_number);
    params
}

/// Query carrying a required `licenseNumber`.
pub(crate) fn required_license(license_number: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("licenseNumber", license_number);
    params
}

/// Percent-encode a caller-supplied path segment such as a package label.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::function;

    mock! {
        pub Wire {}

        #[async_trait]
        impl Transport for Wire {
            async fn execute(&self, request: TransportRequest) -> Result<Bytes>;
        }
    }

    #[derive(Debug, Serialize, serde::Deserialize, PartialEq)]
    struct Record {
        #[serde(rename = "Name")]
        name: String,
    }

    #[tokio::test]
    async fn get_json_wraps_transport_errors_with_context() {
        let mut wire = MockWire::new();
        wire.expect_execute().times(1).returning(|_| {
            Err(Error::Status {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let client = MetrcClient::with_transport(Arc::new(wire));
        let err = client
            .get_json::<Vec<Record>>("items/v1/active", "could not get active items")
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "could not get active items: response failed with code 500 and body boom"
        );
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn get_json_reports_deserialization_distinctly() {
        let mut wire = MockWire::new();
        wire.expect_execute()
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"{\"not\":\"a list\"}")));

        let client = MetrcClient::with_transport(Arc::new(wire));
        let err = client
            .get_json::<Vec<Record>>("items/v1/active", "could not get active items")
            .await
            .unwrap_err();

        assert!(matches!(err.root(), Error::DeserializationError(_)));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn send_json_serializes_payload_as_body() {
        let mut wire = MockWire::new();
        wire.expect_execute()
            .withf(|request| {
                request.method == Method::Post
                    && request.endpoint == "strains/v1/create"
                    && request.body.as_deref() == Some(br#"[{"Name":"Blue Dream"}]"#.as_slice())
            })
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"ok")));

        let client = MetrcClient::with_transport(Arc::new(wire));
        let records = vec![Record {
            name: "Blue Dream".to_string(),
        }];
        let body = client
            .send_json(Method::Post, "strains/v1/create", &records, "could not create strains")
            .await
            .unwrap();

        assert_eq!(body, Bytes::from_static(b"ok"));
    }

    #[tokio::test]
    async fn request_timeout_is_forwarded() {
        let mut wire = MockWire::new();
        wire.expect_execute()
            .with(function(|request: &TransportRequest| {
                request.timeout == Some(Duration::from_secs(5))
            }))
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"[]")));

        let client = MetrcClient::with_transport(Arc::new(wire))
            .with_request_timeout(Duration::from_secs(5));
        let records: Vec<Record> = client
            .get_json("facilities/v1", "could not get facilities")
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn license_helpers() {
        assert_eq!(license(None).append_to("items/v1/active"), "items/v1/active");
        assert_eq!(
            license(Some("C12-1000006-LIC")).append_to("items/v1/active"),
            "items/v1/active?licenseNumber=C12-1000006-LIC"
        );
        assert_eq!(
            required_license("C12").append_to("packages/v1/types"),
            "packages/v1/types?licenseNumber=C12"
        );
    }

    #[test]
    fn segment_encodes_reserved_characters() {
        assert_eq!(segment("1A4FF0100000022000000001"), "1A4FF0100000022000000001");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
