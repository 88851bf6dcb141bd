use clap::Parser;
use url::Url;

use crate::config::SourceConfig;
use crate::utils::error::{Result, SourceError};
use crate::utils::validation::{validate_non_empty_string, validate_origin_url, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch a remote image through the proxy source adapters")]
pub struct CliConfig {
    /// Remote image reference, e.g. s3://bucket/key or https://host/image.jpg
    pub image_url: String,

    #[arg(long, value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Maximum allowed image size in bytes (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub max_allowed_size: u64,

    /// Static Authorization header forwarded to HTTP origins
    #[arg(long)]
    pub authorization: Option<String>,

    /// Write the image to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Lower the CLI flags into the adapter-facing configuration.
    pub fn to_source_config(&self) -> Result<SourceConfig> {
        let mut allowed_origins = Vec::with_capacity(self.allowed_origins.len());
        for origin in &self.allowed_origins {
            let parsed = Url::parse(origin).map_err(|e| SourceError::InvalidConfigValue {
                field: "allowed_origins".to_string(),
                value: origin.clone(),
                reason: format!("invalid URL format: {}", e),
            })?;
            allowed_origins.push(parsed);
        }

        Ok(SourceConfig {
            max_allowed_size: self.max_allowed_size,
            allowed_origins,
            authorization: self.authorization.clone(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("image_url", &self.image_url)?;

        for origin in &self.allowed_origins {
            validate_origin_url("allowed_origins", origin)?;
        }

        if let Some(authorization) = &self.authorization {
            validate_non_empty_string("authorization", authorization)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            image_url: "s3://testdata/large.jpg".to_string(),
            allowed_origins: vec![],
            max_allowed_size: 0,
            authorization: None,
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn lowers_origins_into_urls() {
        let mut config = base_config();
        config.allowed_origins = vec!["http://foo".to_string(), "s3://bucket".to_string()];

        let source_config = config.to_source_config().unwrap();
        assert_eq!(source_config.allowed_origins.len(), 2);
        assert!(source_config.origin_allowed("foo"));
        assert!(source_config.origin_allowed("bucket"));
        assert!(!source_config.origin_allowed("bar.com"));
    }

    #[test]
    fn rejects_unparseable_origins() {
        let mut config = base_config();
        config.allowed_origins = vec!["not a url".to_string()];

        assert!(matches!(
            config.to_source_config(),
            Err(SourceError::InvalidConfigValue { .. })
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn validates_required_fields() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.image_url = "   ".to_string();
        assert!(config.validate().is_err());

        config.image_url = "s3://testdata/large.jpg".to_string();
        config.authorization = Some(String::new());
        assert!(config.validate().is_err());
    }
}
