//! Application state for the Workforce Cost Optimization Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::explain::{ExplanationGenerator, TemplateNarrator};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded cost catalog and the narrative generator. Both are read-only,
/// so no locking is needed under concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded cost catalog.
    config: Arc<ConfigLoader>,
    /// The injected explanation generator.
    narrator: Arc<dyn ExplanationGenerator + Send + Sync>,
}

impl AppState {
    /// Creates a new application state with the given configuration
    /// loader and the default template narrator.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_narrator(config, TemplateNarrator)
    }

    /// Creates an application state with a custom explanation generator.
    pub fn with_narrator<N>(config: ConfigLoader, narrator: N) -> Self
    where
        N: ExplanationGenerator + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            narrator: Arc::new(narrator),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the explanation generator.
    pub fn narrator(&self) -> &(dyn ExplanationGenerator + Send + Sync) {
        self.narrator.as_ref()
    }
}
