use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended inside block {name:?} opened at line {line}")]
    TruncatedInput {
        name: String,
        line: usize,
    },

    #[error("Unresolved reference: {0}")]
    Unresolved(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
