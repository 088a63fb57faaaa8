use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unknown menu category `{0}`")]
    UnknownCategory(String),

    #[error("invalid site content: {0}")]
    InvalidContent(String),

    #[error("invalid config value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
}
