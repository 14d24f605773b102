use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a global tier key is required to build a resolver")]
    MissingGlobalKey,

    #[error("failed to read tier config from {path}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse tier config at {path}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("tier '{name}' in {path} must be a table")]
    TierNotTable { name: String, path: PathBuf },
}
