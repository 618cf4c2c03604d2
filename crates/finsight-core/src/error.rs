use thiserror::Error;

/// Validation and contract errors exposed by `finsight-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("alert name must be at least {min} characters")]
    AlertNameTooShort { min: usize },
    #[error("asset symbol is required (e.g., BTC/USD)")]
    AlertAssetTooShort,
    #[error("alert value is required")]
    EmptyAlertValue,

    #[error("invalid condition type '{value}', expected one of price_target, confidence_change, pattern_detected")]
    InvalidConditionType { value: String },
    #[error("invalid notification method '{value}', expected one of email, sms, in-app")]
    InvalidNotificationMethod { value: String },
    #[error("invalid flag '{value}', expected one of successful, unsuccessful")]
    InvalidManualFlag { value: String },

    #[error("no alert with id '{id}'")]
    UnknownAlert { id: String },
    #[error("no prediction with id '{id}'")]
    UnknownPrediction { id: String },

    #[error("timestamp must be RFC3339: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Errors raised while loading or saving a JSON store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is not valid JSON: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
