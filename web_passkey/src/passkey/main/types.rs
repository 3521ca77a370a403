use serde::Serialize;

use crate::utils::serialize_base64url;

/// COSE algorithm identifier for ECDSA with P-256 and SHA-256 (ES256).
pub const ES256: i32 = -7;

/// Public-key credential creation request handed to the platform.
///
/// This mirrors the `publicKey` member of `navigator.credentials.create()`
/// options. It serializes to the WebAuthn JSON shape (camelCase keys, byte
/// buffers as unpadded base64url) so a platform binding can pass it straight
/// through a JS bridge.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRequest {
    pub rp: RelyingParty,
    pub user: UserEntity,
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    #[serde(serialize_with = "serialize_base64url")]
    pub challenge: Vec<u8>,
    pub attestation: AttestationConveyancePreference,
    pub authenticator_selection: AuthenticatorSelection,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RelyingParty {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    #[serde(serialize_with = "serialize_base64url")]
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PubKeyCredParam {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i32,
}

impl PubKeyCredParam {
    pub(super) fn es256() -> Self {
        Self {
            type_: "public-key".to_string(),
            alg: ES256,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelection {
    pub authenticator_attachment: AuthenticatorAttachment,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticatorAttachment {
    #[serde(rename = "platform")]
    Platform,
    #[serde(rename = "cross-platform")]
    CrossPlatform,
}

impl AuthenticatorAttachment {
    /// `"platform"` selects the platform authenticator. Everything else,
    /// including no value at all, falls back to cross-platform.
    pub fn from_type(type_: Option<&str>) -> Self {
        match type_ {
            Some("platform") => AuthenticatorAttachment::Platform,
            _ => AuthenticatorAttachment::CrossPlatform,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttestationConveyancePreference {
    #[serde(rename = "none")]
    None,
}
