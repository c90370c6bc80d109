use crate::utils::error::{DoiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A DOI together with everything needed to register it at DataCite.
///
/// Owned by the calling repository; the client never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoiRecord {
    pub doi: String,
    pub landing_page_url: String,
    pub metadata_xml: String,
}

impl DoiRecord {
    pub fn new(
        doi: impl Into<String>,
        landing_page_url: impl Into<String>,
        metadata_xml: impl Into<String>,
    ) -> Self {
        Self {
            doi: doi.into(),
            landing_page_url: landing_page_url.into(),
            metadata_xml: metadata_xml.into(),
        }
    }

    /// Builds a record whose metadata XML is read from `path`.
    pub fn from_metadata_file(
        doi: impl Into<String>,
        landing_page_url: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let metadata_xml =
            std::fs::read_to_string(path).map_err(|source| DoiError::MetadataFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(doi, landing_page_url, metadata_xml))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Raw request payload with its explicit content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub content_type: String,
    pub data: String,
}

/// One authenticated request against the MDS API.
#[derive(Clone, PartialEq, Eq)]
pub struct MdsRequest {
    pub method: HttpMethod,
    pub url: String,
    pub username: String,
    pub password: String,
    pub body: Option<RequestBody>,
}

impl fmt::Debug for MdsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MdsRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("body", &self.body)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdsResponse {
    pub status: u16,
    pub body: String,
}

impl MdsResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The individual MDS calls the client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// First step of a registration: POST /metadata
    RegisterMetadata,
    /// Second step of a registration: PUT /doi/{doi}
    RegisterUrl,
    CheckDoi,
    UpdateUrl,
    DeleteMetadata,
}

impl Operation {
    /// Status code MDS answers with when the call succeeded.
    pub fn expected_status(self) -> u16 {
        match self {
            Operation::RegisterMetadata | Operation::RegisterUrl | Operation::UpdateUrl => 201,
            Operation::CheckDoi | Operation::DeleteMetadata => 200,
        }
    }

    /// Whether the call binds a DOI to a URL (PUT /doi/{doi}).
    pub fn is_url_binding(self) -> bool {
        matches!(self, Operation::RegisterUrl | Operation::UpdateUrl)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::RegisterMetadata => "register metadata",
            Operation::RegisterUrl => "register url",
            Operation::CheckDoi => "check doi",
            Operation::UpdateUrl => "update url",
            Operation::DeleteMetadata => "delete metadata",
        };
        f.write_str(name)
    }
}
