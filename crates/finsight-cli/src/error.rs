use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] finsight_core::ValidationError),

    #[error(transparent)]
    Store(#[from] finsight_core::StoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Serialization(_) => 4,
            Self::Store(_) => 10,
            Self::Io { .. } => 10,
        }
    }
}
