use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Quota unreachable: accepted {accepted} of {target} articles after {rounds} rounds")]
    QuotaUnreachable {
        accepted: usize,
        target: usize,
        rounds: u32,
    },

    #[error("Resolution error: {0}")]
    Resolution(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
