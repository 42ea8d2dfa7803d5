use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the module harness before or around a module run.
/// Every variant ends up in the `fail_json` envelope.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("failed to read argument file {path:?}")]
    ArgsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse argument file {path:?}: {reason}")]
    ArgsParse { path: PathBuf, reason: String },

    #[error("Unsupported parameters for ({module}) module: {keys}. Supported parameters include: {supported}.")]
    Unsupported {
        module: String,
        keys: String,
        supported: String,
    },

    #[error("missing required arguments: {0}")]
    MissingRequired(String),

    #[error("argument '{name}' is of type {kind} and we were unable to convert to str")]
    Conversion { name: String, kind: &'static str },

    #[error("_ansible_check_mode must be a boolean, got {0}")]
    InvalidCheckMode(String),

    #[error("invalid module parameters")]
    Params(#[from] serde_json::Error),
}
