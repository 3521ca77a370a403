mod config;
mod errors;
mod main;
mod platform;
mod types;

pub use config::{PASSKEY_CONFIG, PasskeyConfig};

pub use errors::PasskeyError;

pub use main::{
    AttestationConveyancePreference, AuthenticatorAttachment, AuthenticatorSelection,
    CredentialRequest, ES256, PasskeyTrigger, PubKeyCredParam, RelyingParty, UserEntity,
    WebPasskey, build_credential_request, use_passkey,
};

pub use platform::{CredentialCapabilities, CredentialPlatform, PlatformError, PlatformErrorKind};

pub use types::{
    Challenge, ChallengeProducer, PasskeyOptions, PasskeyUser, PlatformSupport, RandomChallenge,
    UserId,
};
