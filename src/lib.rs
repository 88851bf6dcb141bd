pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpImageSource, S3ImageSource};
pub use config::SourceConfig;
pub use crate::core::registry::{SourceFactory, SourceRegistry, SourceSet};
pub use domain::model::{ImageRequest, RemoteRef, SourceKind, URL_QUERY_KEY};
pub use domain::ports::ImageSource;
pub use utils::error::{Result, SourceError};
