use std::path::Path;

use indexmap::IndexMap;

use crate::error::{ConfigError, Result};
use crate::value::{ConfigValue, Tier};

/// Config file looked up in the project directory.
pub const CONFIG_FILE: &str = "drydock.toml";

/// Named configuration tiers, populated once at process startup.
///
/// Each top-level table in `drydock.toml` is one tier: by convention a
/// `docker` table carries the global settings and further tables carry
/// task-scoped local settings. The store is read-only after startup;
/// resolution copies tiers out of it and never writes back.
#[derive(Debug, Clone, Default)]
pub struct TierStore {
    tiers: IndexMap<String, Tier>,
}

impl TierStore {
    /// Load from `drydock.toml` at the given path, or return an empty store
    /// if the file is absent.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Load {
            path: config_path.clone(),
            source: e,
        })?;
        Self::parse(&content, &config_path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: IndexMap<String, ConfigValue> =
            toml::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut tiers = IndexMap::new();
        for (name, value) in raw {
            match value {
                ConfigValue::Map(tier) => {
                    tiers.insert(name, tier);
                }
                _ => {
                    return Err(ConfigError::TierNotTable {
                        name,
                        path: path.to_path_buf(),
                    });
                }
            }
        }
        Ok(Self { tiers })
    }

    /// Add or replace a tier. Used for in-code declarations and tests.
    pub fn with_tier(mut self, name: impl Into<String>, tier: Tier) -> Self {
        self.tiers.insert(name.into(), tier);
        self
    }

    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tiers.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Overlay `<PREFIX>_<TIER>_<KEY>` environment variables onto tiers
    /// already present in the store, so credentials can stay out of the
    /// config file (`DRYDOCK_DOCKER_TOKEN=...` sets `token` in the `docker`
    /// tier). Values land as strings.
    pub fn overlay_env(&mut self, prefix: &str) {
        let vars: Vec<(String, String)> = std::env::vars().collect();
        for (name, tier) in &mut self.tiers {
            let tier_prefix = format!("{}_{}_", prefix.to_uppercase(), name.to_uppercase());
            for (var, value) in &vars {
                if let Some(key) = var.strip_prefix(&tier_prefix) {
                    if key.is_empty() {
                        continue;
                    }
                    tracing::debug!(tier = %name, key = %key.to_lowercase(), "env overlay");
                    tier.insert(key.to_lowercase(), ConfigValue::String(value.clone()));
                }
            }
        }
    }
}
