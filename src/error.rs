use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode PDF {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to encode PDF {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("credential unavailable: {0}")]
    Credential(String),

    #[error("request to completion service failed: {0}")]
    Transport(String),

    #[error("completion service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("output would overwrite the input: {0}")]
    OutputIsInput(PathBuf),

    #[error("page range {start}-{end} is outside 1-{page_count}")]
    PageRange {
        start: u32,
        end: u32,
        page_count: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn file_access(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &std::path::Path, reason: impl ToString) -> Self {
        Error::Decode {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encode(path: &std::path::Path, reason: impl ToString) -> Self {
        Error::Encode {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
