use thiserror::Error;

/// Errors that can occur while building or configuring the study graph.
///
/// Query operations never produce errors: a lookup that matches nothing
/// returns an empty collection. Errors are reserved for ingestion-time
/// contract violations in the upstream data and for configuration I/O.
#[derive(Error, Debug)]
pub enum VerseGraphError {
    #[error("ingest error: {message} (record: {record})")]
    Ingest { message: String, record: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `VerseGraphError`.
pub type Result<T> = std::result::Result<T, VerseGraphError>;
