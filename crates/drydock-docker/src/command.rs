//! Pure docker command-line synthesis.
//!
//! Every function maps a [`ResolvedConfig`] to a command string (or, for
//! login, a command plus its credential environment). No side effects, no
//! validation of the docker daemon: strings in, strings out.

use drydock_core::ResolvedConfig;

use crate::error::CredentialError;

/// Interactive shell used when the configuration names none.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Build context used when the configuration names none.
pub const DEFAULT_CONTEXT: &str = ".";

/// Environment variable carrying the registry user for `login`.
pub const LOGIN_USER_VAR: &str = "DOCKER_USER";

/// Environment variable carrying the registry token for `login`.
pub const LOGIN_TOKEN_VAR: &str = "DOCKER_TOKEN";

/// `docker build` with cache policy, build args in declaration order, and
/// the image tag applied to the configured context.
pub fn build(cfg: &ResolvedConfig) -> String {
    let mut cmd = vec!["docker build".to_owned()];

    if cfg.no_cache {
        cmd.push("--no-cache".to_owned());
    }

    for (key, value) in &cfg.buildargs {
        cmd.push(format!("--build-arg '{key}={value}'"));
    }

    let context = if cfg.context.is_empty() {
        DEFAULT_CONTEXT
    } else {
        &cfg.context
    };
    cmd.push(format!("--tag '{}' '{}'", cfg.image, context));

    cmd.join(" ")
}

/// `docker run --rm` with volumes and environment variables in declaration
/// order. Interactive mode attaches a terminal and swaps the entrypoint for
/// a shell; non-interactive mode appends the configured command, if any.
pub fn run(cfg: &ResolvedConfig, interactive: bool) -> String {
    let mut cmd = vec!["docker run --rm".to_owned()];

    for (mount, host) in &cfg.volumes {
        cmd.push(format!("--volume '{host}:{mount}'"));
    }

    for (name, value) in &cfg.envvars {
        let name = name.to_uppercase();
        match value {
            Some(value) => cmd.push(format!("--env '{name}={value}'")),
            None => cmd.push(format!("--env '{name}'")),
        }
    }

    if !cfg.extra.is_empty() {
        cmd.push(cfg.extra.clone());
    }

    if interactive {
        let shell = if cfg.shell.is_empty() {
            DEFAULT_SHELL
        } else {
            &cfg.shell
        };
        cmd.push(format!("--interactive --tty --entrypoint '{shell}'"));
    }

    cmd.push(format!("'{}'", cfg.image));

    if !interactive && !cfg.command.is_empty() {
        cmd.push(cfg.command.clone());
    }

    cmd.join(" ")
}

/// A login command and the environment that carries its credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginCommand {
    pub command: String,
    pub env: Vec<(String, String)>,
}

/// `docker login` against the configured registry.
///
/// Credentials travel in the returned environment; the command string
/// references them by variable name only.
pub fn login(cfg: &ResolvedConfig) -> Result<LoginCommand, CredentialError> {
    let registry = require(&cfg.registry, "registry")?;
    let user = require(&cfg.user, "user")?;
    let token = require(&cfg.token, "token")?;

    Ok(LoginCommand {
        command: format!(
            "docker login --username \"${LOGIN_USER_VAR}\" --password \"${LOGIN_TOKEN_VAR}\" '{registry}'"
        ),
        env: vec![
            (LOGIN_USER_VAR.to_owned(), user.to_owned()),
            (LOGIN_TOKEN_VAR.to_owned(), token.to_owned()),
        ],
    })
}

/// `docker pull` of the full image reference.
pub fn pull(cfg: &ResolvedConfig) -> String {
    format!("docker pull '{}'", cfg.image)
}

/// `docker push` of the full image reference.
pub fn push(cfg: &ResolvedConfig) -> String {
    format!("docker push '{}'", cfg.image)
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, CredentialError> {
    if value.is_empty() {
        Err(CredentialError::Missing { field })
    } else {
        Ok(value)
    }
}
