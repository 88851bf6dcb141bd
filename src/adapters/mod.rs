// Adapters layer: one module per retrieval backend.

pub mod http;
pub mod s3;

pub use http::HttpImageSource;
pub use s3::S3ImageSource;
