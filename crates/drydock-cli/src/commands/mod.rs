mod build;
mod login;
mod probe;
mod pull;
mod push;
mod release;
mod run;
mod shell;

use std::path::PathBuf;

use drydock_core::{Overrides, ResolvedConfig, Resolver, ResolverOptions, TierStore};
use drydock_docker::error::ExecError;
use drydock_docker::executor::{CommandExecutor, DryRunExecutor, ExecOutcome, ShellExecutor};
use drydock_docker::DockerTasks;

pub use build::build;
pub use login::login;
pub use probe::probe;
pub use pull::pull;
pub use push::push;
pub use release::release;
pub use run::run;
pub use shell::shell;

/// Global tier key all docker tasks resolve against.
pub(crate) const GLOBAL_KEY: &str = "docker";

/// Prefix for environment overlay variables (`DRYDOCK_DOCKER_TOKEN`, ...).
pub(crate) const ENV_PREFIX: &str = "DRYDOCK";

/// Per-invocation context shared by every subcommand.
pub(crate) struct TaskContext {
    pub config_dir: PathBuf,
    pub local: Option<String>,
    pub dry_run: bool,
}

impl TaskContext {
    /// Load the tier store, overlay the environment, and resolve one
    /// configuration. The CLI only constructs recognized override keys, so
    /// leftovers are just logged.
    pub(crate) fn resolve(&self, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
        let mut store = TierStore::load(&self.config_dir)?;
        store.overlay_env(ENV_PREFIX);

        let resolver = Resolver::new(store, ResolverOptions::with_global_key(GLOBAL_KEY))?;
        let (cfg, leftovers) = resolver.resolve(self.local.as_deref(), overrides);
        if !leftovers.is_empty() {
            tracing::debug!(
                keys = ?leftovers.keys().collect::<Vec<_>>(),
                "ignoring unrecognized overrides"
            );
        }
        Ok(cfg)
    }

    pub(crate) fn tasks(&self) -> DockerTasks<CliExecutor> {
        let executor = if self.dry_run {
            CliExecutor::DryRun(DryRunExecutor)
        } else {
            CliExecutor::Shell(ShellExecutor)
        };
        DockerTasks::with_executor(executor)
    }
}

/// Executor selected by `--dry-run`.
pub(crate) enum CliExecutor {
    Shell(ShellExecutor),
    DryRun(DryRunExecutor),
}

impl CommandExecutor for CliExecutor {
    async fn execute(
        &self,
        command: &str,
        env: &[(String, String)],
        interactive: bool,
    ) -> Result<ExecOutcome, ExecError> {
        match self {
            Self::Shell(executor) => executor.execute(command, env, interactive).await,
            Self::DryRun(executor) => executor.execute(command, env, interactive).await,
        }
    }
}

/// Print captured command output, if any.
pub(crate) fn echo(outcome: &ExecOutcome) {
    if !outcome.output.is_empty() {
        print!("{}", outcome.output);
    }
}
