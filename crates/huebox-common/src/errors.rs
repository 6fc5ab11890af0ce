#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("opacity should be between 0 and 1, but got: {0}")]
    InvalidOpacity(f64),
}
