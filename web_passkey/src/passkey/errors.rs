use thiserror::Error;

use super::platform::PlatformError;
use crate::utils::UtilError;

/// Errors that can occur while preparing or performing a passkey creation.
///
/// None of these cross the public `authenticate()` / `trigger()` boundary:
/// they are logged there and collapsed into `None`. They surface through
/// [`WebPasskey::try_authenticate`](crate::WebPasskey::try_authenticate) for
/// callers that want to tell the failure paths apart.
#[derive(Debug, Error)]
pub enum PasskeyError {
    /// The platform has no public-key credential object, or lacks a required capability
    #[error("Device not supported")]
    UnsupportedDevice,

    /// The wrapper was constructed without options
    #[error("Passkey cannot be initialized, No configuration defined")]
    MissingConfiguration,

    /// The platform rejected the credential creation call
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// The challenge producer failed to yield a buffer
    #[error("Invalid challenge: {0}")]
    Challenge(String),

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),

    /// Error from JSON serialization
    #[error("Serde error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
