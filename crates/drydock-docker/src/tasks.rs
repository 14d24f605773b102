use drydock_core::ResolvedConfig;

use crate::command;
use crate::error::DockerError;
use crate::executor::{CommandExecutor, ExecOutcome, ShellExecutor};

/// Docker task driver, parameterized over the executor for testability.
///
/// Registry-touching operations (`login`, `pull`, `push`, and the implicit
/// pull in `run`/`shell`) execute only when the configuration is remote;
/// against a local configuration they succeed without touching anything.
/// `login` always runs before any other remote operation in the same call
/// chain: `pull` and `push` log in first, `run`/`shell` reach login through
/// their pull.
pub struct DockerTasks<E: CommandExecutor = ShellExecutor> {
    executor: E,
}

impl DockerTasks<ShellExecutor> {
    pub fn new() -> Self {
        Self {
            executor: ShellExecutor,
        }
    }
}

impl Default for DockerTasks<ShellExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> DockerTasks<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Build the image from the configured context.
    pub async fn build(&self, cfg: &ResolvedConfig) -> Result<ExecOutcome, DockerError> {
        self.exec("build", &command::build(cfg)).await
    }

    /// Run the container, pulling (and therefore logging in) first when the
    /// configuration is remote.
    pub async fn run(&self, cfg: &ResolvedConfig) -> Result<ExecOutcome, DockerError> {
        self.pull(cfg).await?;
        self.exec("run", &command::run(cfg, false)).await
    }

    /// Run an interactive shell in the container, pulling first when the
    /// configuration is remote.
    pub async fn shell(&self, cfg: &ResolvedConfig) -> Result<ExecOutcome, DockerError> {
        self.pull(cfg).await?;
        let cmd = command::run(cfg, true);
        self.executor
            .execute(&cmd, &[], true)
            .await
            .map_err(|e| DockerError::Exec {
                operation: "shell",
                source: e,
            })
    }

    /// Log in to the configured registry. A no-op for local configurations.
    pub async fn login(&self, cfg: &ResolvedConfig) -> Result<ExecOutcome, DockerError> {
        if !cfg.remote {
            tracing::debug!("local configuration, skipping login");
            return Ok(ExecOutcome::default());
        }

        let login = command::login(cfg).map_err(|e| DockerError::Credentials {
            operation: "login",
            source: e,
        })?;
        self.executor
            .execute(&login.command, &login.env, false)
            .await
            .map_err(|e| DockerError::Exec {
                operation: "login",
                source: e,
            })
    }

    /// Pull the image, logging in first. A no-op for local configurations.
    pub async fn pull(&self, cfg: &ResolvedConfig) -> Result<ExecOutcome, DockerError> {
        if !cfg.remote {
            tracing::debug!("local configuration, skipping pull");
            return Ok(ExecOutcome::default());
        }

        self.login(cfg).await?;
        self.exec("pull", &command::pull(cfg)).await
    }

    /// Push the image, logging in first. A no-op for local configurations.
    pub async fn push(&self, cfg: &ResolvedConfig) -> Result<ExecOutcome, DockerError> {
        if !cfg.remote {
            tracing::debug!("local configuration, skipping push");
            return Ok(ExecOutcome::default());
        }

        self.login(cfg).await?;
        self.exec("push", &command::push(cfg)).await
    }

    async fn exec(
        &self,
        operation: &'static str,
        cmd: &str,
    ) -> Result<ExecOutcome, DockerError> {
        self.executor
            .execute(cmd, &[], false)
            .await
            .map_err(|e| DockerError::Exec {
                operation,
                source: e,
            })
    }
}
