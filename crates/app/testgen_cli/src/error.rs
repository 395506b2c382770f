use thiserror::Error;

use testgen_api_client::ClientError;
use testgen_core::openapi::ParseError;
use testgen_core::session::{SessionError, ValidationWarning};
use testgen_core::upload::UploadError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Json::{:?}: {}", .0, .0)]
    Json(#[from] serde_json::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Failed to parse OpenAPI specification: {}", .0)]
    Parse(#[from] ParseError),

    #[error("{}", .0)]
    Upload(#[from] UploadError),

    #[error("{}", .0)]
    Session(#[from] SessionError),

    #[error("{}", .0)]
    Warning(#[from] ValidationWarning),

    #[error("{}", .0)]
    Client(#[from] ClientError),
}

impl Error {
    /// Process exit code: 2 for unmet preconditions, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Warning(_) => 2,
            _ => 1,
        }
    }
}
