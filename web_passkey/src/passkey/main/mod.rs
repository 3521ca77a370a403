mod authenticate;
mod request;
mod support;
mod trigger;
mod types;

pub use authenticate::WebPasskey;

pub use request::build_credential_request;

pub use trigger::{PasskeyTrigger, use_passkey};

pub use types::{
    AttestationConveyancePreference, AuthenticatorAttachment, AuthenticatorSelection,
    CredentialRequest, ES256, PubKeyCredParam, RelyingParty, UserEntity,
};
