use thiserror::Error;

pub type Result<T> = std::result::Result<T, HostlintError>;

/// Operational errors: config loading, I/O, rendering.
///
/// Validation failures never show up here; they are data inside
/// `ValidationResult` and cannot abort a batch.
#[derive(Error, Debug)]
pub enum HostlintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl HostlintError {
    pub fn exit_code(&self) -> i32 {
        2
    }
}
