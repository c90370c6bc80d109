use crate::utils::error::{DoiError, Result};
use url::Url;

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DoiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DoiError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DoiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// DOI names have the form `prefix/suffix` with a `10.` directory indicator.
pub fn validate_doi(field_name: &str, doi: &str) -> Result<()> {
    let valid = match doi.split_once('/') {
        Some((prefix, suffix)) => prefix.starts_with("10.") && prefix.len() > 3 && !suffix.is_empty(),
        None => false,
    };

    if !valid {
        return Err(DoiError::InvalidArgument {
            field: field_name.to_string(),
            value: doi.to_string(),
            reason: "DOI must look like 10.<registrant>/<suffix>".to_string(),
        });
    }
    Ok(())
}
