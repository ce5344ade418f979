use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network Error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Cannot decode page as UTF-8: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),
    #[error("Cannot parse URL: {0}")]
    UrlError(#[from] url::ParseError),
}
