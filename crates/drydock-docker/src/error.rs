/// A registry credential required for a remote operation is not set.
///
/// Names the missing field; never carries the values themselves.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("registry credentials incomplete: '{field}' is not set")]
    Missing { field: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to launch shell")]
    Spawn { source: std::io::Error },

    #[error("command exited with status {status}: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("command output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

/// Failure of one docker task, tagged with the operation that failed.
#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker {operation} aborted")]
    Credentials {
        operation: &'static str,
        #[source]
        source: CredentialError,
    },

    #[error("docker {operation} failed")]
    Exec {
        operation: &'static str,
        #[source]
        source: ExecError,
    },
}
