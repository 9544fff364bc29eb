use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid values for start and end parameters")]
    InvalidWindow,

    #[error("Unable to get data from source\nFrom: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unable to parse `{0}`")]
    Parsing(String),

    #[error("Unable to open the default media handler")]
    Launcher,
}

impl Error {
    pub(crate) fn parsing(what: &str) -> Self {
        Error::Parsing(what.to_string())
    }
}
