/*!
 * Error types for Courier
 */

use courier_connect::ConnectError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourierError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REMOTE: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Error, Debug)]
pub enum CourierError {
    /// Operator supplied malformed input (non-numeric size or element)
    #[error("Invalid input: {0}")]
    Input(String),

    /// Channel to the remote endpoint could not be established
    #[error("Connection to {endpoint} failed: {reason}")]
    Connection { endpoint: String, reason: String },

    /// A remote call failed or its response violated the service contract
    #[error("Remote call failed: {0}")]
    RemoteCall(ConnectError),

    /// The local origin address could not be determined
    #[error("Address resolution failed: {0}")]
    AddressResolution(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CourierError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // Fatal before any remote interaction
            CourierError::Input(_)
            | CourierError::AddressResolution(_)
            | CourierError::Config(_)
            | CourierError::Io(_) => EXIT_FATAL,
            // Failures of the remote interaction itself
            CourierError::Connection { .. } | CourierError::RemoteCall(_) => EXIT_REMOTE,
        }
    }
}

impl From<ConnectError> for CourierError {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::ConnectionFailed { endpoint, reason } => {
                CourierError::Connection { endpoint, reason }
            }
            other => CourierError::RemoteCall(other),
        }
    }
}
