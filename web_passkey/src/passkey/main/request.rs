use super::types::{
    AttestationConveyancePreference, AuthenticatorAttachment, AuthenticatorSelection,
    CredentialRequest, PubKeyCredParam, RelyingParty, UserEntity,
};

use crate::passkey::config::PasskeyConfig;
use crate::passkey::errors::PasskeyError;
use crate::passkey::types::PasskeyOptions;

/// Assembles the platform-facing creation request from caller options.
///
/// 1. Relying party id (and name, unless configured) from the hostname
/// 2. User id encoded to bytes
/// 3. Challenge resolved (default zero buffer, producer output, or raw bytes)
/// 4. ES256 as the only public key algorithm
/// 5. Attestation "none"
/// 6. Attachment derived from the option `type`
///
/// The request is built fresh on every call; `options` is only read.
pub async fn build_credential_request(
    options: &PasskeyOptions,
    hostname: &str,
    config: &PasskeyConfig,
) -> Result<CredentialRequest, PasskeyError> {
    let challenge = match &options.challenge {
        None => vec![0u8; config.default_challenge_len],
        Some(challenge) => challenge.resolve().await.map_err(|e| {
            tracing::error!("Failed to resolve challenge: {}", e);
            e
        })?,
    };

    let rp = RelyingParty {
        id: hostname.to_string(),
        name: config
            .rp_name
            .clone()
            .unwrap_or_else(|| hostname.to_string()),
    };

    let user = UserEntity {
        id: options.user.id.to_bytes(),
        name: options.user.name.clone(),
        display_name: options.user.display_name.clone(),
    };

    let authenticator_selection = AuthenticatorSelection {
        authenticator_attachment: AuthenticatorAttachment::from_type(options.type_.as_deref()),
    };

    let request = CredentialRequest {
        rp,
        user,
        pub_key_cred_params: vec![PubKeyCredParam::es256()],
        challenge,
        attestation: AttestationConveyancePreference::None,
        authenticator_selection,
    };

    tracing::debug!("Credential request: {:?}", request);

    Ok(request)
}

impl CredentialRequest {
    /// WebAuthn JSON form of the request.
    pub fn to_json(&self) -> Result<String, PasskeyError> {
        Ok(serde_json::to_string(self)?)
    }
}
