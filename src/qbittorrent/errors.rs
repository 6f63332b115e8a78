use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Decode error for {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Invalid qBittorrent URL: {0}")]
    InvalidUrl(String),
}
