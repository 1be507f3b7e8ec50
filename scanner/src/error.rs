use thiserror::Error;

pub type Result<T, E = ScanError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScanError {
    #[error("The API_URL environment variable is missing.")]
    MissingApiUrl,
    #[error("HTTP client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the lookup service failed.")]
    ConnectionFailed,
    #[error("The lookup service rejected the request [status: {0}].")]
    Rejected(u16),
    #[error("The lookup service answered with a body that can't be read.")]
    MalformedResponse,
}
