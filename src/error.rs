use thiserror::Error;

pub type Result<T> = std::result::Result<T, AqiError>;

#[derive(Error, Debug)]
pub enum AqiError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Drawing error: {0}")]
    Drawing(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for AqiError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AqiError::Drawing(err.to_string())
    }
}
