//! Build, run, and publish a containerized static-site builder.
//!
//! This is the unified facade crate that re-exports all drydock sub-crates.
//! Use feature flags to control which components are included.
//!
//! # Feature flags
//!
//! | Feature | Default | Crate | Description |
//! |---------|---------|-------|-------------|
//! | `core` | yes | `drydock-core` | Configuration tiers and resolution |
//! | `docker` | yes | `drydock-docker` | Docker command synthesis and gated execution |
//! | `net` | yes | `drydock-net` | Retrying HTTP fetch with backoff |
//!
//! # Quick start
//!
//! ```toml
//! [dependencies]
//! drydock = "0.3"
//! ```
//!
//! ```rust,no_run
//! use std::path::Path;
//! use drydock::{Overrides, Resolver, ResolverOptions, TierStore};
//! use drydock::docker::command;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TierStore::load(Path::new("."))?;
//! let resolver = Resolver::new(store, ResolverOptions::with_global_key("docker"))?;
//! let (cfg, _) = resolver.resolve(None, Overrides::new());
//! let cmd = command::build(&cfg);
//! # Ok(())
//! # }
//! ```

// Core types flattened into root namespace for convenience.
#[cfg(feature = "core")]
pub use drydock_core::*;

/// Docker command synthesis and gated execution.
#[cfg(feature = "docker")]
pub mod docker {
    pub use drydock_docker::*;
}

/// Retrying HTTP fetch with exponential backoff.
#[cfg(feature = "net")]
pub mod net {
    pub use drydock_net::*;
}
