//! web_passkey - Passkey creation wrapper for WebAuthn capable platforms
//!
//! This crate assembles `navigator.credentials.create()` style requests from a
//! small set of options, checks that the platform can create passkeys, and
//! hands the request to the platform exactly once. Key generation, attestation
//! and credential storage stay with the platform, reached through the
//! [`CredentialPlatform`] trait.
//!
//! ```ignore
//! let trigger = web_passkey::use_passkey(platform, Some(options));
//! if let Some(credential) = trigger.trigger().await {
//!     // hand the credential to the relying party
//! }
//! ```

mod passkey;
mod utils;

pub use passkey::{
    AttestationConveyancePreference, AuthenticatorAttachment, AuthenticatorSelection, Challenge,
    ChallengeProducer, CredentialCapabilities, CredentialPlatform, CredentialRequest, ES256,
    PASSKEY_CONFIG, PasskeyConfig, PasskeyError, PasskeyOptions, PasskeyTrigger, PasskeyUser,
    PlatformError, PlatformErrorKind, PlatformSupport, PubKeyCredParam, RandomChallenge,
    RelyingParty, UserEntity, UserId, WebPasskey, build_credential_request, use_passkey,
};

pub use utils::{UtilError, to_buffer};
