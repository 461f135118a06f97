use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Corpus source unavailable: {0}")]
    SourceUnavailable(String),
}
