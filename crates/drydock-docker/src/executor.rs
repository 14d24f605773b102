use std::process::Stdio;

use crate::error::ExecError;

/// Outcome of one executed command.
#[derive(Debug, Clone, Default)]
pub struct ExecOutcome {
    pub exit_code: i32,
    pub output: String,
}

/// Abstraction over execution of synthesized command strings.
///
/// Production code uses [`ShellExecutor`], `--dry-run` uses
/// [`DryRunExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor: Send + Sync {
    /// Execute one command. `env` is added on top of the inherited
    /// environment. Interactive commands attach the terminal instead of
    /// capturing output.
    async fn execute(
        &self,
        command: &str,
        env: &[(String, String)],
        interactive: bool,
    ) -> Result<ExecOutcome, ExecError>;
}

/// Runs commands through `sh -c`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    async fn execute(
        &self,
        command: &str,
        env: &[(String, String)],
        interactive: bool,
    ) -> Result<ExecOutcome, ExecError> {
        tracing::info!(%command, interactive, "executing");

        if interactive {
            let status = tokio::process::Command::new("sh")
                .arg("-c")
                .arg(command)
                .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(|e| ExecError::Spawn { source: e })?;

            let exit_code = status.code().unwrap_or(-1);
            if status.success() {
                Ok(ExecOutcome {
                    exit_code,
                    output: String::new(),
                })
            } else {
                Err(ExecError::CommandFailed {
                    command: command.to_owned(),
                    status: exit_code,
                    stderr: String::new(),
                })
            }
        } else {
            let output = tokio::process::Command::new("sh")
                .arg("-c")
                .arg(command)
                .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|e| ExecError::Spawn { source: e })?;

            if output.status.success() {
                let stdout = String::from_utf8(output.stdout)
                    .map_err(|e| ExecError::InvalidUtf8 { source: e })?;
                Ok(ExecOutcome {
                    exit_code: 0,
                    output: stdout,
                })
            } else {
                Err(ExecError::CommandFailed {
                    command: command.to_owned(),
                    status: output.status.code().unwrap_or(-1),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                })
            }
        }
    }
}

/// Prints each command instead of running it. The credential environment is
/// never printed.
pub struct DryRunExecutor;

impl CommandExecutor for DryRunExecutor {
    async fn execute(
        &self,
        command: &str,
        _env: &[(String, String)],
        _interactive: bool,
    ) -> Result<ExecOutcome, ExecError> {
        println!("{command}");
        Ok(ExecOutcome::default())
    }
}
