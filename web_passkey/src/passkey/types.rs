use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::PasskeyError;
use crate::utils::{gen_random_bytes, to_buffer};

/// Identifier of the user a passkey is created for.
///
/// Text ids are encoded as UTF-8. Numeric ids are encoded as the UTF-8 bytes
/// of their decimal form, so `UserId::Number(42)` and `UserId::from("42")`
/// produce the same user handle. Fractional ids (`1.5`) must be passed as
/// text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(i64),
}

impl UserId {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            UserId::Text(s) => to_buffer(s),
            UserId::Number(n) => to_buffer(&n.to_string()),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Text(s) => f.write_str(s),
            UserId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId::Text(value)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        UserId::Number(i64::from(value))
    }
}

/// Identity fields of the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyUser {
    pub id: UserId,
    pub name: String,
    pub display_name: String,
}

impl PasskeyUser {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// Something that yields a fresh challenge for each creation request.
///
/// Any `Fn() -> impl Future<Output = Vec<u8>>` closure is a producer. Implement
/// the trait directly when producing can fail (e.g. fetching from a server).
#[async_trait]
pub trait ChallengeProducer: Send + Sync {
    async fn produce(&self) -> Result<Vec<u8>, PasskeyError>;
}

#[async_trait]
impl<F, Fut> ChallengeProducer for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Vec<u8>> + Send + 'static,
{
    async fn produce(&self) -> Result<Vec<u8>, PasskeyError> {
        Ok((self)().await)
    }
}

/// Challenge producer drawing bytes from the system CSPRNG.
#[derive(Clone, Copy, Debug)]
pub struct RandomChallenge {
    pub len: usize,
}

impl Default for RandomChallenge {
    fn default() -> Self {
        Self { len: 32 }
    }
}

#[async_trait]
impl ChallengeProducer for RandomChallenge {
    async fn produce(&self) -> Result<Vec<u8>, PasskeyError> {
        Ok(gen_random_bytes(self.len)?)
    }
}

/// Challenge source for a creation request.
#[derive(Clone)]
pub enum Challenge {
    /// Fixed bytes, sent unchanged.
    Bytes(Vec<u8>),
    /// Invoked once per request; its output is sent unchanged.
    Producer(Arc<dyn ChallengeProducer>),
}

impl Challenge {
    pub fn producer(producer: impl ChallengeProducer + 'static) -> Self {
        Challenge::Producer(Arc::new(producer))
    }

    pub(crate) async fn resolve(&self) -> Result<Vec<u8>, PasskeyError> {
        match self {
            Challenge::Bytes(bytes) => Ok(bytes.clone()),
            Challenge::Producer(producer) => producer.produce().await,
        }
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Challenge::Bytes(bytes) => f.debug_tuple("Bytes").field(bytes).finish(),
            Challenge::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl From<Vec<u8>> for Challenge {
    fn from(value: Vec<u8>) -> Self {
        Challenge::Bytes(value)
    }
}

impl From<&[u8]> for Challenge {
    fn from(value: &[u8]) -> Self {
        Challenge::Bytes(value.to_vec())
    }
}

/// Known values for [`PasskeyOptions::type_`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformSupport {
    Platform,
    CrossPlatform,
}

impl PlatformSupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformSupport::Platform => "platform",
            PlatformSupport::CrossPlatform => "cross-platform",
        }
    }
}

impl From<PlatformSupport> for String {
    fn from(value: PlatformSupport) -> Self {
        value.as_str().to_string()
    }
}

/// Caller-supplied configuration for one passkey creation.
///
/// Built once and handed to [`WebPasskey`](crate::WebPasskey); never mutated
/// afterwards.
#[derive(Clone, Debug)]
pub struct PasskeyOptions {
    pub user: PasskeyUser,
    /// `None` sends a zero-filled challenge.
    pub challenge: Option<Challenge>,
    /// Authenticator attachment hint. Only `"platform"` selects the platform
    /// authenticator; any other value, or none, means cross-platform.
    pub type_: Option<String>,
}

impl PasskeyOptions {
    pub fn new(user: PasskeyUser) -> Self {
        Self {
            user,
            challenge: None,
            type_: None,
        }
    }

    pub fn with_challenge(mut self, challenge: impl Into<Challenge>) -> Self {
        self.challenge = Some(challenge.into());
        self
    }

    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }
}
