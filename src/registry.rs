//! Name-token registration for axis scales.
//!
//! Host frameworks select a scale by its name token and hand over a JSON
//! configuration payload; the registry resolves the token to a factory and
//! builds the scale.

use indexmap::IndexMap;
use tracing::warn;

use crate::core::scale::{AxisScale, LinLogScale, LinLogScaleConfig};
use crate::error::{ScaleError, ScaleResult};

/// Builds a scale from a JSON configuration value.
pub type ScaleFactory = fn(serde_json::Value) -> ScaleResult<Box<dyn AxisScale>>;

/// Insertion-ordered mapping from scale name tokens to factories.
#[derive(Debug, Clone)]
pub struct ScaleRegistry {
    factories: IndexMap<&'static str, ScaleFactory>,
}

impl ScaleRegistry {
    /// Registry with no scales registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registry with the built-in `"linlog"` scale pre-registered.
    #[must_use]
    pub fn with_builtin_scales() -> Self {
        let mut registry = Self::empty();
        registry.register(LinLogScale::NAME, linlog_scale_factory);
        registry
    }

    /// Registers a factory under `name`, replacing any previous registration.
    pub fn register(&mut self, name: &'static str, factory: ScaleFactory) {
        if self.factories.insert(name, factory).is_some() {
            warn!(scale = name, "scale factory overwritten");
        }
    }

    /// Builds the scale registered under `name` from `config`.
    pub fn create(&self, name: &str, config: serde_json::Value) -> ScaleResult<Box<dyn AxisScale>> {
        let Some(factory) = self.factories.get(name) else {
            return Err(ScaleError::UnknownScale(name.to_owned()));
        };
        factory(config)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered name tokens in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        Self::with_builtin_scales()
    }
}

fn linlog_scale_factory(config: serde_json::Value) -> ScaleResult<Box<dyn AxisScale>> {
    let config: LinLogScaleConfig =
        serde_json::from_value(config).map_err(|err| ScaleError::InvalidConfig(err.to_string()))?;
    Ok(Box::new(LinLogScale::new(config)?))
}
