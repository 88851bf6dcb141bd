use std::sync::Arc;

use anyhow::Result;
use httpmock::prelude::*;
use imgsource::{ImageRequest, ImageSource, S3ImageSource, SourceConfig, SourceError, SourceRegistry};
use url::Url;

#[tokio::test]
async fn end_to_end_http_fetch_through_the_registry() -> Result<()> {
    let image = b"jpeg body from the origin".to_vec();

    let server = MockServer::start();
    let origin = server.mock(|when, then| {
        when.method(GET).path("/images/cat.jpg");
        then.status(200)
            .header("Content-Type", "image/jpeg")
            .body(&image);
    });

    // Only the mock server's host is allowed.
    let config = Arc::new(SourceConfig {
        max_allowed_size: 1024 * 1024,
        allowed_origins: vec![Url::parse(&server.base_url())?],
        authorization: None,
    });

    let registry = SourceRegistry::with_defaults();
    let sources = registry.build(Arc::clone(&config));

    let request = ImageRequest::from_reference(&server.url("/images/cat.jpg"))?;
    let source = sources
        .match_source(&request)
        .expect("the HTTP source should match an http:// reference");
    assert_eq!(source.kind().to_string(), "http");

    let body = source.get_image(&request).await?;
    assert_eq!(body, image);
    origin.assert();

    // A reference pointing anywhere else is rejected by the same set.
    let rejected = ImageRequest::from_reference("http://elsewhere.example/cat.jpg")?;
    let source = sources.match_source(&rejected).expect("still matches");
    let err = source.get_image(&rejected).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "not allowed remote URL origin: elsewhere.example"
    );

    Ok(())
}

#[tokio::test]
async fn registry_dispatches_s3_references_to_the_s3_source() -> Result<()> {
    let registry = SourceRegistry::with_defaults();
    let sources = registry.build(Arc::new(SourceConfig::default()));

    let request = ImageRequest::from_reference("s3://testdata/large.jpg")?;
    let source = sources
        .match_source(&request)
        .expect("the S3 source should match an s3:// reference");
    assert_eq!(source.kind().to_string(), "s3");

    Ok(())
}

// The proxy's fetch step against an S3-compatible endpoint, with the client
// injected the way a host managing its own SDK configuration would.
#[tokio::test]
async fn s3_fetch_respects_the_size_cap_and_returns_exact_bytes() -> Result<()> {
    let image = vec![0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    let server = MockServer::start();
    let head = server.mock(|when, then| {
        when.method(httpmock::Method::HEAD).path("/testdata/ok.png");
        then.status(200).header("content-length", "8");
    });
    let get = server.mock(|when, then| {
        when.method(GET).path("/testdata/ok.png");
        then.status(200).body(&image);
    });

    let creds = aws_sdk_s3::config::Credentials::new("test", "test", None, None, "static");
    let sdk_config = aws_sdk_s3::Config::builder()
        .endpoint_url(server.base_url())
        .region(aws_sdk_s3::config::Region::new("us-east-1"))
        .credentials_provider(creds)
        .force_path_style(true)
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .build();
    let client = aws_sdk_s3::Client::from_conf(sdk_config);

    let config = Arc::new(SourceConfig {
        max_allowed_size: 1024,
        allowed_origins: vec![],
        authorization: None,
    });
    let source = S3ImageSource::with_client(client, config);

    let request = ImageRequest::from_reference("s3://testdata/ok.png")?;
    let body = source.get_image(&request).await?;

    assert_eq!(body, image);
    head.assert();
    get.assert();

    let missing = ImageRequest::from_reference("s3://testdata/missing.png")?;
    let err = source.get_image(&missing).await.unwrap_err();
    assert!(matches!(err, SourceError::Backend(_)));

    Ok(())
}
