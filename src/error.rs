use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} response body is not valid JSON: {source}. Body: {body}")]
    InvalidJson {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}
