use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use ring::rand::SecureRandom;
use serde::Serializer;

/// Encodes a string into the UTF-8 byte buffer handed to the platform.
///
/// User ids and textual challenges go through this before they reach a
/// [`CredentialRequest`](crate::CredentialRequest).
pub fn to_buffer(data: &str) -> Vec<u8> {
    data.as_bytes().to_vec()
}

pub(crate) fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

pub(crate) fn gen_random_bytes(len: usize) -> Result<Vec<u8>, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random bytes".to_string()))?;
    Ok(bytes)
}

/// Serializes a byte buffer as unpadded base64url, the WebAuthn JSON form.
pub(crate) fn serialize_base64url<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&base64url_encode(bytes.as_ref()))
}

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),
}
