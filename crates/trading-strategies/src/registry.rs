//! Registry of built-in signal sources.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use trading_core::error::SignalError;
use trading_core::traits::SignalSource;

use crate::NeutralSignal;

/// Information about a registered signal source.
#[derive(Debug, Clone, Serialize)]
pub struct SignalInfo {
    pub name: String,
    pub description: String,
}

type Factory = fn() -> Arc<dyn SignalSource>;

/// Signal sources selectable by name.
pub struct SignalRegistry {
    sources: HashMap<String, (SignalInfo, Factory)>,
}

impl SignalRegistry {
    /// Registry with all built-in sources.
    pub fn new() -> Self {
        let mut registry = Self {
            sources: HashMap::new(),
        };
        registry.register(|| Arc::new(NeutralSignal) as Arc<dyn SignalSource>);
        registry
    }

    /// Register a source under its own name, replacing any previous entry.
    pub fn register(&mut self, factory: Factory) {
        let source = factory();
        let info = SignalInfo {
            name: source.name().to_string(),
            description: source.description().to_string(),
        };
        self.sources.insert(info.name.clone(), (info, factory));
    }

    /// All sources, sorted by name.
    pub fn list(&self) -> Vec<&SignalInfo> {
        let mut infos: Vec<_> = self.sources.values().map(|(info, _)| info).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    pub fn exists(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Create a source by name.
    pub fn create(&self, name: &str) -> Result<Arc<dyn SignalSource>, SignalError> {
        self.sources
            .get(name)
            .map(|(_, factory)| factory())
            .ok_or_else(|| SignalError::NotFound(name.to_string()))
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}
