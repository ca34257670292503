//! Extractor trait and registry
//!
//! Extractors are looked up by name. The registry is an ordinary value built
//! by the caller; nothing registers itself at start-up.

use crate::emit::Emitter;
use crate::error::{Error, Result};
use crate::extractor::{ExtractStats, Info, TableauExtractor};
use crate::types::{JsonValue, SERVICE};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// A metadata source
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Static description and sample recipe
    fn info(&self) -> Info;

    /// Check a recipe without touching the network
    fn validate(&self, config: &JsonValue) -> Result<()>;

    /// Validate the recipe and establish a session
    async fn init(&mut self, config: &JsonValue) -> Result<()>;

    /// Push every extracted record into `emitter`
    async fn extract(&self, emitter: &mut dyn Emitter) -> Result<ExtractStats>;

    /// Run [`Extractor::extract`] under a deadline
    ///
    /// When the deadline passes, in-flight requests are dropped and the run
    /// fails with [`Error::Timeout`].
    async fn extract_with_deadline(
        &self,
        emitter: &mut dyn Emitter,
        deadline: Duration,
    ) -> Result<ExtractStats> {
        match tokio::time::timeout(deadline, self.extract(emitter)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                timeout_ms: deadline.as_millis() as u64,
            }),
        }
    }
}

/// Builds a fresh extractor instance
pub type ExtractorFactory = Box<dyn Fn() -> Box<dyn Extractor> + Send + Sync>;

/// Name-indexed extractor factories
#[derive(Default)]
pub struct ExtractorRegistry {
    factories: BTreeMap<String, ExtractorFactory>,
}

impl ExtractorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every extractor shipped with this crate
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(
            SERVICE.to_string(),
            Box::new(|| Box::new(TableauExtractor::new()) as Box<dyn Extractor>),
        );
        registry
    }

    /// Register a factory under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Extractor> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(Error::ExtractorExists { name });
        }
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// Build a new extractor by name
    pub fn build(&self, name: &str) -> Result<Box<dyn Extractor>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::ExtractorNotFound {
                name: name.to_string(),
            })
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_builtin_registry() {
        let registry = ExtractorRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["tableau"]);
        assert!(registry.contains("tableau"));

        let extractor = registry.build("tableau").unwrap();
        assert_eq!(extractor.info().name, "tableau");
        assert!(extractor.info().tags.contains(&"extractor"));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ExtractorRegistry::with_builtin();
        let err = registry
            .register("tableau", || Box::new(TableauExtractor::new()))
            .unwrap_err();
        assert!(matches!(err, Error::ExtractorExists { .. }));
        assert_eq!(err.kind(), ErrorKind::Registry);
    }

    #[test]
    fn test_register_and_build() {
        let mut registry = ExtractorRegistry::new();
        registry
            .register("tableau-staging", || Box::new(TableauExtractor::new()))
            .unwrap();
        assert!(registry.build("tableau-staging").is_ok());
    }

    #[test]
    fn test_unknown_extractor() {
        let registry = ExtractorRegistry::new();
        let err = registry.build("looker").err().unwrap();
        assert!(matches!(err, Error::ExtractorNotFound { .. }));
    }

    #[test]
    fn test_validate_through_trait_object() {
        let extractor = ExtractorRegistry::with_builtin().build("tableau").unwrap();
        let err = extractor
            .validate(&serde_json::json!({ "host": "invalid_host" }))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
