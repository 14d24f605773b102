//! Docker command synthesis and gated execution for drydock.
//!
//! [`command`] turns a resolved configuration into `docker` command strings.
//! [`DockerTasks`] runs them through a [`CommandExecutor`], gating every
//! registry-touching operation on the configuration being remote and
//! ordering `login` before `pull`/`push`.

pub mod command;
pub mod error;
pub mod executor;
pub mod tasks;

pub use command::LoginCommand;
pub use error::{CredentialError, DockerError, ExecError};
pub use executor::{CommandExecutor, DryRunExecutor, ExecOutcome, ShellExecutor};
pub use tasks::DockerTasks;
