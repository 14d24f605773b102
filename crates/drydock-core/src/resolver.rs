use indexmap::IndexMap;

use crate::error::{ConfigError, Result};
use crate::resolved::ResolvedConfig;
use crate::store::TierStore;
use crate::value::{ConfigValue, Tier};

/// Override keys honored by [`Resolver::resolve`]. Anything else is handed
/// back to the caller untouched as a leftover.
pub const OVERRIDE_KEYS: &[&str] = &[
    "buildargs",
    "command",
    "container",
    "context",
    "envvars",
    "extra",
    "image",
    "name",
    "namespace",
    "no_cache",
    "registry",
    "remote",
    "shell",
    "tag",
    "token",
    "user",
    "volumes",
];

/// Caller-supplied overrides for one resolution call.
pub type Overrides = IndexMap<String, ConfigValue>;

/// Knobs for the merge behavior.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Name of the tier used as the base of every merge. Required.
    pub global_key: Option<String>,
    /// Local-tier key that, when truthy, discards the global tier entirely.
    pub no_global_flag: String,
    /// Drop overrides with falsy values instead of letting them clear tier
    /// settings.
    pub filter_falsy_overrides: bool,
    /// Compute `image` and `container` from the merged configuration.
    pub derive_names: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            global_key: None,
            no_global_flag: "no_global_config".to_owned(),
            filter_falsy_overrides: true,
            derive_names: true,
        }
    }
}

impl ResolverOptions {
    pub fn with_global_key(key: impl Into<String>) -> Self {
        Self {
            global_key: Some(key.into()),
            ..Self::default()
        }
    }
}

/// Merges the global tier, an optional local tier, and per-call overrides
/// into one [`ResolvedConfig`].
///
/// Precedence, lowest to highest: global tier, local tier, overrides. A
/// local tier whose `no_global_config` key is truthy replaces the global
/// tier instead of updating it. Derived names are computed from the fully
/// merged mapping and applied last, so they see overridden values.
///
/// Stored tiers are copied on every read and never mutated; identical
/// tiers and overrides yield an identical [`ResolvedConfig`] on every call.
#[derive(Debug, Clone)]
pub struct Resolver {
    store: TierStore,
    global_key: String,
    no_global_flag: String,
    filter_falsy_overrides: bool,
    derive_names: bool,
}

impl Resolver {
    /// Fails with [`ConfigError::MissingGlobalKey`] when the options name
    /// no global tier.
    pub fn new(store: TierStore, options: ResolverOptions) -> Result<Self> {
        let global_key = options.global_key.ok_or(ConfigError::MissingGlobalKey)?;
        Ok(Self {
            store,
            global_key,
            no_global_flag: options.no_global_flag,
            filter_falsy_overrides: options.filter_falsy_overrides,
            derive_names: options.derive_names,
        })
    }

    /// Resolve one configuration. `local` selects a local tier by name;
    /// unrecognized override keys come back as the second tuple element.
    pub fn resolve(&self, local: Option<&str>, overrides: Overrides) -> (ResolvedConfig, Overrides) {
        let global = self
            .store
            .tier(&self.global_key)
            .cloned()
            .unwrap_or_default();
        let local_tier = local
            .and_then(|name| self.store.tier(name))
            .cloned()
            .unwrap_or_default();

        let (mut recognized, leftovers) = partition_overrides(overrides);
        if self.filter_falsy_overrides {
            recognized.retain(|_, value| value.is_truthy());
        }

        let mut cfg: Tier = if local_tier.is_empty() {
            global
        } else if local_tier
            .get(&self.no_global_flag)
            .is_some_and(ConfigValue::is_truthy)
        {
            local_tier
        } else {
            let mut merged = global;
            merged.extend(local_tier);
            merged
        };

        cfg.extend(recognized);

        if self.derive_names {
            let image = image_name(&cfg);
            let container = container_name(&cfg);
            cfg.insert("image".to_owned(), ConfigValue::String(image));
            cfg.insert("container".to_owned(), ConfigValue::String(container));
        }

        tracing::debug!(
            local,
            leftover_keys = ?leftovers.keys().collect::<Vec<_>>(),
            "configuration resolved"
        );

        (ResolvedConfig::from_merged(&cfg), leftovers)
    }
}

fn partition_overrides(overrides: Overrides) -> (Overrides, Overrides) {
    let mut recognized = Overrides::new();
    let mut leftovers = Overrides::new();
    for (key, value) in overrides {
        if OVERRIDE_KEYS.contains(&key.as_str()) {
            recognized.insert(key, value);
        } else {
            leftovers.insert(key, value);
        }
    }
    (recognized, leftovers)
}

/// Full image reference: `[registry/][namespace/]name[:tag]`. The registry
/// token and the `master` tag fallback apply only to remote configurations;
/// empty tokens are dropped.
fn image_name(cfg: &Tier) -> String {
    let field = |key: &str| {
        cfg.get(key)
            .and_then(ConfigValue::as_str_field)
            .unwrap_or_default()
    };

    let mut tag = field("tag");
    let remote = cfg.get("remote").is_some_and(ConfigValue::is_truthy);

    let tokens: &[&str] = if remote {
        if tag.is_empty() {
            tag = "master".to_owned();
        }
        &["registry", "namespace", "name"]
    } else {
        &["namespace", "name"]
    };

    let image = tokens
        .iter()
        .map(|token| field(token))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if tag.is_empty() {
        image
    } else {
        format!("{image}:{tag}")
    }
}

/// Full container name: `name[-tag]`.
fn container_name(cfg: &Tier) -> String {
    let field = |key: &str| {
        cfg.get(key)
            .and_then(ConfigValue::as_str_field)
            .unwrap_or_default()
    };

    let name = field("name");
    let tag = field("tag");
    if tag.is_empty() {
        name
    } else {
        format!("{name}-{tag}")
    }
}
