//! Layered configuration resolution for drydock.
//!
//! Configuration lives in named *tiers* ([`TierStore`], loaded from
//! `drydock.toml`): one global tier plus optional task-scoped local tiers.
//! A [`Resolver`] merges the global tier, a selected local tier, and
//! per-call overrides into an immutable [`ResolvedConfig`] that command
//! synthesis consumes.

pub mod error;
pub mod resolved;
pub mod resolver;
pub mod store;
pub mod value;

pub use error::{ConfigError, Result};
pub use resolved::ResolvedConfig;
pub use resolver::{OVERRIDE_KEYS, Overrides, Resolver, ResolverOptions};
pub use store::{CONFIG_FILE, TierStore};
pub use value::{ConfigValue, Tier};
