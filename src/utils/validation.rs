use url::Url;

use crate::utils::error::{Result, SourceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SourceError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_origin_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SourceError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Origin cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.host_str() {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(SourceError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: "Origin has no host component".to_string(),
            }),
        },
        Err(e) => Err(SourceError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}
