//! Error types for the stats server.

/// All errors that can occur in the server outside a stats request.
///
/// Errors inside a request never surface here; the handler turns them into
/// the uniform failure body.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
