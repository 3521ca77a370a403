//! Seam between the wrapper and the host's credential subsystem.
//!
//! In a browser this is `window.PublicKeyCredential`, `location.hostname` and
//! `navigator.credentials.create()`. Any host that can answer these questions
//! (a WebView bridge, an OS authenticator binding, a test double) implements
//! [`CredentialPlatform`].

use async_trait::async_trait;
use thiserror::Error;

use super::main::CredentialRequest;

/// The host's public-key credential capability object.
#[async_trait]
pub trait CredentialCapabilities: Send + Sync {
    /// Whether a user-verifying platform authenticator (Touch ID, Windows Hello, ...) is present.
    async fn is_user_verifying_platform_authenticator_available(
        &self,
    ) -> Result<bool, PlatformError>;

    /// Whether passkey autofill style (conditional) prompts are available.
    async fn is_conditional_mediation_available(&self) -> Result<bool, PlatformError>;
}

/// Access to the host platform's credential API.
#[async_trait]
pub trait CredentialPlatform: Send + Sync {
    /// Opaque credential object returned by a successful creation.
    type Credential: Send + 'static;

    /// The capability object, or `None` when the host exposes none.
    fn capabilities(&self) -> Option<&dyn CredentialCapabilities>;

    /// Hostname of the current document origin.
    fn hostname(&self) -> String;

    /// Issues the credential creation request. Called at most once per attempt.
    async fn create_credential(
        &self,
        request: &CredentialRequest,
    ) -> Result<Self::Credential, PlatformError>;
}

/// DOMException names a credential call can reject with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformErrorKind {
    NotAllowed,
    NotSupported,
    InvalidState,
    Security,
    Abort,
    Constraint,
    Unknown,
}

impl PlatformErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformErrorKind::NotAllowed => "NotAllowedError",
            PlatformErrorKind::NotSupported => "NotSupportedError",
            PlatformErrorKind::InvalidState => "InvalidStateError",
            PlatformErrorKind::Security => "SecurityError",
            PlatformErrorKind::Abort => "AbortError",
            PlatformErrorKind::Constraint => "ConstraintError",
            PlatformErrorKind::Unknown => "UnknownError",
        }
    }

    /// Maps a DOMException `name` onto a kind. Unknown names map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => PlatformErrorKind::NotAllowed,
            "NotSupportedError" => PlatformErrorKind::NotSupported,
            "InvalidStateError" => PlatformErrorKind::InvalidState,
            "SecurityError" => PlatformErrorKind::Security,
            "AbortError" => PlatformErrorKind::Abort,
            "ConstraintError" => PlatformErrorKind::Constraint,
            _ => PlatformErrorKind::Unknown,
        }
    }
}

impl std::fmt::Display for PlatformErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejection reported by the host platform.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct PlatformError {
    pub kind: PlatformErrorKind,
    pub message: String,
}

impl PlatformError {
    pub fn new(kind: PlatformErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// User cancelled, timed out, or the document is not focused.
    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::NotAllowed, message)
    }
}
