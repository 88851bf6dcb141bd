use std::sync::Arc;

use crate::adapters;
use crate::config::SourceConfig;
use crate::domain::model::{ImageRequest, SourceKind};
use crate::domain::ports::ImageSource;

/// Constructs an adapter against the shared configuration.
pub type SourceFactory = fn(Arc<SourceConfig>) -> Box<dyn ImageSource>;

/// Start-up wiring table mapping a source kind to its constructor.
///
/// The host builds the table once before serving requests and then only
/// reads it; registration must not run concurrently with lookups.
/// Registering a kind twice silently replaces the earlier entry, and there
/// is no removal operation.
pub struct SourceRegistry {
    factories: Vec<(SourceKind, SourceFactory)>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Registry with the shipped adapters wired in probe order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(adapters::s3::KIND, adapters::s3::factory);
        registry.register(adapters::http::KIND, adapters::http::factory);
        registry
    }

    pub fn register(&mut self, kind: SourceKind, factory: SourceFactory) {
        match self.factories.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = factory,
            None => self.factories.push((kind, factory)),
        }
    }

    pub fn get(&self, kind: SourceKind) -> Option<SourceFactory> {
        self.factories
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, factory)| *factory)
    }

    pub fn kinds(&self) -> Vec<SourceKind> {
        self.factories.iter().map(|(kind, _)| *kind).collect()
    }

    /// Construct every registered adapter against `config`.
    pub fn build(&self, config: Arc<SourceConfig>) -> SourceSet {
        SourceSet {
            sources: self
                .factories
                .iter()
                .map(|(_, factory)| factory(Arc::clone(&config)))
                .collect(),
        }
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The constructed adapters, probed in registration order.
pub struct SourceSet {
    sources: Vec<Box<dyn ImageSource>>,
}

impl SourceSet {
    /// First adapter whose `matches` accepts the request.
    pub fn match_source(&self, request: &ImageRequest) -> Option<&dyn ImageSource> {
        self.sources
            .iter()
            .find(|source| source.matches(request))
            .map(|source| source.as_ref())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
