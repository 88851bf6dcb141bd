use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use imgsource::utils::{logger, validation::Validate};
use imgsource::{CliConfig, ImageRequest, SourceRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    let source_config = Arc::new(config.to_source_config()?);
    let registry = SourceRegistry::with_defaults();
    let sources = registry.build(source_config);

    let request = ImageRequest::from_reference(&config.image_url)?;
    let Some(source) = sources.match_source(&request) else {
        eprintln!("no registered source matches {}", config.image_url);
        std::process::exit(1);
    };

    tracing::info!("Fetching {} via the {} source", config.image_url, source.kind());

    match source.get_image(&request).await {
        Ok(image) => match &config.output {
            Some(path) => {
                std::fs::write(path, &image)?;
                tracing::info!("Saved {} bytes to {}", image.len(), path);
            }
            None => {
                std::io::stdout().write_all(&image)?;
            }
        },
        Err(e) => {
            tracing::error!("Fetch failed: {}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
