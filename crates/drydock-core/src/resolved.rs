use indexmap::IndexMap;

use crate::value::{ConfigValue, Tier};

/// The immutable result of one resolution: every recognized setting with
/// its default filled in, plus the computed `image` and `container` names.
///
/// Constructed once per operation from the fully merged tier mapping and
/// never mutated afterwards. Command synthesis reads from this record only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    /// Name part of the image and container.
    pub name: String,
    /// Namespace part of the image, e.g. `uberspace/homepage`.
    pub namespace: String,
    /// Image and container tag.
    pub tag: String,
    /// Registry host, only used when `remote` is set.
    pub registry: String,
    /// Registry login user.
    pub user: String,
    /// Registry login token.
    pub token: String,
    /// Whether registry-touching operations actually reach a registry.
    pub remote: bool,
    /// Mount point → host path, in declaration order.
    pub volumes: IndexMap<String, String>,
    /// Environment variable name → value; `None` inherits from the host.
    pub envvars: IndexMap<String, Option<String>>,
    /// Extra arguments appended verbatim to `run`.
    pub extra: String,
    /// Interactive shell; synthesis falls back to `/bin/sh` when empty.
    pub shell: String,
    /// Container command for non-interactive `run`.
    pub command: String,
    /// Build context; synthesis falls back to `.` when empty.
    pub context: String,
    /// `--build-arg` entries, in declaration order.
    pub buildargs: IndexMap<String, String>,
    /// Skip the build cache.
    pub no_cache: bool,
    /// Full image reference, computed from the merged configuration.
    pub image: String,
    /// Full container name, computed from the merged configuration.
    pub container: String,
}

impl ResolvedConfig {
    /// Freeze a fully merged tier mapping into a resolved record.
    pub(crate) fn from_merged(cfg: &Tier) -> Self {
        Self {
            name: str_field(cfg, "name"),
            namespace: str_field(cfg, "namespace"),
            tag: str_field(cfg, "tag"),
            registry: str_field(cfg, "registry"),
            user: str_field(cfg, "user"),
            token: str_field(cfg, "token"),
            remote: flag(cfg, "remote"),
            volumes: map_field(cfg, "volumes"),
            envvars: env_field(cfg, "envvars"),
            extra: str_field(cfg, "extra"),
            shell: str_field(cfg, "shell"),
            command: str_field(cfg, "command"),
            context: str_field(cfg, "context"),
            buildargs: map_field(cfg, "buildargs"),
            no_cache: flag(cfg, "no_cache"),
            image: str_field(cfg, "image"),
            container: str_field(cfg, "container"),
        }
    }
}

fn str_field(cfg: &Tier, key: &str) -> String {
    cfg.get(key)
        .and_then(ConfigValue::as_str_field)
        .unwrap_or_default()
}

fn flag(cfg: &Tier, key: &str) -> bool {
    cfg.get(key).is_some_and(ConfigValue::is_truthy)
}

fn map_field(cfg: &Tier, key: &str) -> IndexMap<String, String> {
    cfg.get(key)
        .and_then(ConfigValue::as_map)
        .map(|m| {
            m.iter()
                .map(|(k, v)| (k.clone(), v.as_str_field().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default()
}

/// An empty value is the inherit marker: the variable is named in the
/// container without a value and picks one up from the host environment.
fn env_field(cfg: &Tier, key: &str) -> IndexMap<String, Option<String>> {
    cfg.get(key)
        .and_then(ConfigValue::as_map)
        .map(|m| {
            m.iter()
                .map(|(k, v)| {
                    let value = v.as_str_field().filter(|s| !s.is_empty());
                    (k.clone(), value)
                })
                .collect()
        })
        .unwrap_or_default()
}
