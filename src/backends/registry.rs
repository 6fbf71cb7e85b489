use std::collections::HashMap;

use crate::backends::{Backend, FfmpegBackend, MeltBackend};
use crate::config::Config;

/// Registry for managing available media backends
///
/// The registry provides a central place to discover and instantiate
/// backends. Backends are registered by name and constructed against the
/// active configuration when requested.
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn Fn(&Config) -> Box<dyn Backend>>>,
}

impl BackendRegistry {
    /// Create a new registry with all built-in backends
    pub fn new() -> Self {
        let mut registry = Self {
            backends: HashMap::new(),
        };

        registry.register_builtin_backends();
        registry
    }

    fn register_builtin_backends(&mut self) {
        self.backends.insert(
            "ffmpeg".to_string(),
            Box::new(|config| Box::new(FfmpegBackend::new(config))),
        );

        self.backends.insert(
            "melt".to_string(),
            Box::new(|config| Box::new(MeltBackend::new(config))),
        );
    }

    /// Register a custom backend
    ///
    /// # Arguments
    ///
    /// * `name` - Unique name for the backend
    /// * `factory` - Function that builds the backend from the configuration
    pub fn register<F>(&mut self, name: String, factory: F)
    where
        F: Fn(&Config) -> Box<dyn Backend> + 'static,
    {
        self.backends.insert(name, Box::new(factory));
    }

    /// Get a backend by name, constructed against the given configuration
    ///
    /// Returns None if no backend with that name is registered.
    pub fn get_backend(&self, name: &str, config: &Config) -> Option<Box<dyn Backend>> {
        self.backends.get(name).map(|factory| factory(config))
    }

    /// Get all available backend names, sorted for stable output
    pub fn available_backends(&self) -> Vec<String> {
        let mut names: Vec<String> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a backend is available
    pub fn has_backend(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// Get the number of registered backends
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
