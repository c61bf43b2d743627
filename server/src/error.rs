//! Server startup errors.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {key}: {value:?}")]
    Config { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
