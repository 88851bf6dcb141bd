pub mod registry;

pub use crate::domain::model::{ImageRequest, RemoteRef, SourceKind};
pub use crate::domain::ports::ImageSource;
pub use crate::utils::error::Result;
pub use registry::{SourceFactory, SourceRegistry, SourceSet};
