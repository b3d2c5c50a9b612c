/// Core error type for the resolver service.
///
/// The HTTP layer maps this taxonomy onto status codes: `Validation` → 400,
/// `NotFound` → 404, everything else → 500.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("telegram entity not found")]
    NotFound,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
