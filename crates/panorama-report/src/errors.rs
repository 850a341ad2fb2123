use thiserror::Error;

/// Errors emitted while writing the dashboard artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
