use crate::adapters::http::ReqwestTransport;
use crate::adapters::log::NullLog;
use crate::config::DataCiteSettings;
use crate::domain::model::{DoiRecord, HttpMethod, MdsRequest, MdsResponse, Operation, RequestBody};
use crate::domain::ports::{ConfigSource, HttpTransport, RegistrationLog};
use crate::utils::error::{DoiError, Result};
use std::sync::Arc;

pub const METADATA_CONTENT_TYPE: &str = "application/xml;charset=UTF-8";
pub const URL_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// Client for the DataCite Metadata Store (MDS) API.
///
/// Every operation issues its requests one after another and maps the MDS
/// status code to success or `DoiError`. Nothing is retried.
pub struct DoiClient<T: HttpTransport> {
    settings: DataCiteSettings,
    transport: T,
    log: Arc<dyn RegistrationLog>,
}

impl DoiClient<ReqwestTransport> {
    pub fn with_default_transport<C: ConfigSource + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config, ReqwestTransport::new(), None)
    }
}

impl<T: HttpTransport> DoiClient<T> {
    /// Reads `doi.registration.datacite.{username,password,serviceUrl}` from `config`.
    ///
    /// Fails with `DoiError::MissingConfig` (logged at error level) when any of
    /// them is absent or empty. No request is sent.
    pub fn new<C: ConfigSource + ?Sized>(
        config: &C,
        transport: T,
        log: Option<Arc<dyn RegistrationLog>>,
    ) -> Result<Self> {
        let log: Arc<dyn RegistrationLog> = match log {
            Some(log) => log,
            None => Arc::new(NullLog),
        };

        let settings = match DataCiteSettings::from_source(config) {
            Ok(settings) => settings,
            Err(e) => {
                log.error(&e.to_string());
                return Err(e);
            }
        };

        Ok(Self {
            settings,
            transport,
            log,
        })
    }

    pub fn from_settings(settings: DataCiteSettings, transport: T) -> Self {
        Self {
            settings,
            transport,
            log: Arc::new(NullLog),
        }
    }

    pub fn with_log(mut self, log: Arc<dyn RegistrationLog>) -> Self {
        self.log = log;
        self
    }

    pub fn settings(&self) -> &DataCiteSettings {
        &self.settings
    }

    /// Uploads the metadata XML, then binds the DOI to its landing page.
    ///
    /// The URL is only sent once MDS accepted the metadata. DataCite may take
    /// hours before the new DOI resolves; this call does not wait for it.
    pub async fn register_doi(
        &self,
        doi: &str,
        metadata_xml: &str,
        landing_page_url: &str,
    ) -> Result<()> {
        let url = format!("{}/metadata", self.settings.service_url());
        let body = RequestBody {
            content_type: METADATA_CONTENT_TYPE.to_string(),
            data: metadata_xml.to_string(),
        };
        let response = self
            .send(Operation::RegisterMetadata, HttpMethod::Post, &url, Some(body))
            .await?;
        self.expect_status(Operation::RegisterMetadata, &url, response)?;

        // metadata 已被接受，接著綁定 URL
        self.bind_url(Operation::RegisterUrl, doi, landing_page_url)
            .await
    }

    pub async fn register_record(&self, record: &DoiRecord) -> Result<()> {
        self.register_doi(&record.doi, &record.metadata_xml, &record.landing_page_url)
            .await
    }

    /// Returns true when MDS resolves `doi` to exactly `landing_page_url`.
    ///
    /// A DOI that is unknown or not yet resolvable yields `false`; only
    /// transport failures are errors.
    pub async fn check_doi(&self, doi: &str, landing_page_url: &str) -> Result<bool> {
        let url = format!("{}/doi/{}", self.settings.service_url(), doi);
        let response = self
            .send(Operation::CheckDoi, HttpMethod::Get, &url, None)
            .await?;

        self.log.debug(&format!(
            "DataCite response status code (expected {}): {}",
            Operation::CheckDoi.expected_status(),
            response.status
        ));
        self.log.debug(&format!(
            "DataCite response body (expected {}): {}",
            landing_page_url, response.body
        ));

        Ok(response.status == Operation::CheckDoi.expected_status()
            && resolved_url_matches(&response.body, landing_page_url))
    }

    /// Binds an existing DOI to a new landing page.
    pub async fn update_url_for_doi(&self, doi: &str, new_url: &str) -> Result<()> {
        self.bind_url(Operation::UpdateUrl, doi, new_url).await
    }

    /// Marks the metadata record of `doi` inactive. The DOI itself stays minted.
    pub async fn delete_metadata_for_doi(&self, doi: &str) -> Result<()> {
        let url = format!("{}/metadata/{}", self.settings.service_url(), doi);
        let response = self
            .send(Operation::DeleteMetadata, HttpMethod::Delete, &url, None)
            .await?;
        self.expect_status(Operation::DeleteMetadata, &url, response)
    }

    async fn bind_url(&self, operation: Operation, doi: &str, landing_page_url: &str) -> Result<()> {
        let url = format!("{}/doi/{}", self.settings.service_url(), doi);
        let body = RequestBody {
            content_type: URL_CONTENT_TYPE.to_string(),
            data: format!("doi={}\nurl={}", doi, landing_page_url),
        };
        let response = self
            .send(operation, HttpMethod::Put, &url, Some(body))
            .await?;
        self.expect_status(operation, &url, response)
    }

    async fn send(
        &self,
        operation: Operation,
        method: HttpMethod,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<MdsResponse> {
        let request = MdsRequest {
            method,
            url: url.to_string(),
            username: self.settings.username().to_string(),
            password: self.settings.password().to_string(),
            body,
        };

        self.transport.execute(request).await.map_err(|e| {
            let err = DoiError::RequestFailed {
                operation,
                url: url.to_string(),
                message: e.to_string(),
            };
            self.log.error(&err.to_string());
            err
        })
    }

    fn expect_status(&self, operation: Operation, url: &str, response: MdsResponse) -> Result<()> {
        let expected = operation.expected_status();
        self.log.debug(&format!(
            "DataCite response status code (expected {}): {}",
            expected, response.status
        ));
        self.log
            .debug(&format!("DataCite response body: {}", response.body));

        if response.status != expected {
            let err = DoiError::UnexpectedStatus {
                operation,
                url: url.to_string(),
                expected,
                status: response.status,
                body: response.body,
            };
            self.log.error(&err.to_string());
            return Err(err);
        }
        Ok(())
    }
}

/// Compares the URL returned by MDS with the expected landing page.
///
/// Trailing whitespace of the response body (a newline appended by the
/// server or the HTTP stack) is ignored; everything else must match exactly.
fn resolved_url_matches(body: &str, landing_page_url: &str) -> bool {
    body.trim_end() == landing_page_url
}
