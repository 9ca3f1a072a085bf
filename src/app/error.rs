use thiserror::Error;

#[derive(Error, Debug)]
pub enum MushafError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Unknown language: {0}")]
    UnknownLocale(String),

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Required source '{source}' failed: {cause}")]
    RequiredSource {
        source: &'static str,
        #[source]
        cause: Box<MushafError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MushafError {
    /// Wrap a failure from one of the mandatory assembly sources.
    pub fn required(source: &'static str, cause: MushafError) -> Self {
        MushafError::RequiredSource {
            source,
            cause: Box::new(cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, MushafError>;
