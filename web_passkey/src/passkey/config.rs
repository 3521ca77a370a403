use std::{env, sync::LazyLock};

/// Default challenge length when the caller supplies none.
pub(crate) const DEFAULT_CHALLENGE_LEN: usize = 16;

/// Runtime settings for [`WebPasskey`](crate::WebPasskey).
///
/// With every field at its default the wrapper behaves exactly like the
/// browser helper it mirrors: one capability probe, relying-party name equal
/// to the hostname, and a 16 byte zero challenge when none is given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasskeyConfig {
    /// Probe both capability flags a second time inside `authenticate()`.
    pub double_probe: bool,
    /// Relying-party display name. `None` uses the current hostname.
    pub rp_name: Option<String>,
    /// Length of the zero-filled challenge used when options carry none.
    pub default_challenge_len: usize,
}

impl Default for PasskeyConfig {
    fn default() -> Self {
        Self {
            double_probe: false,
            rp_name: None,
            default_challenge_len: DEFAULT_CHALLENGE_LEN,
        }
    }
}

impl PasskeyConfig {
    /// Reads `PASSKEY_DOUBLE_PROBE`, `PASSKEY_RP_NAME` and
    /// `PASSKEY_DEFAULT_CHALLENGE_LEN`, falling back to defaults for unset or
    /// invalid values.
    pub fn from_env() -> Self {
        Self {
            double_probe: parse_double_probe(env::var("PASSKEY_DOUBLE_PROBE").ok()),
            rp_name: env::var("PASSKEY_RP_NAME")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            default_challenge_len: parse_challenge_len(
                env::var("PASSKEY_DEFAULT_CHALLENGE_LEN").ok(),
            ),
        }
    }
}

/// Process-wide configuration, read from the environment on first use.
pub static PASSKEY_CONFIG: LazyLock<PasskeyConfig> = LazyLock::new(PasskeyConfig::from_env);

fn parse_double_probe(value: Option<String>) -> bool {
    match value {
        None => false,
        Some(v) => match v.to_lowercase().as_str() {
            "true" => true,
            "false" => false,
            invalid => {
                tracing::warn!("Invalid double_probe: {}. Using default 'false'", invalid);
                false
            }
        },
    }
}

fn parse_challenge_len(value: Option<String>) -> usize {
    match value {
        None => DEFAULT_CHALLENGE_LEN,
        Some(v) => match v.parse::<usize>() {
            Ok(len) if len > 0 => len,
            _ => {
                tracing::warn!(
                    "Invalid default challenge length: {}. Using default '{}'",
                    v,
                    DEFAULT_CHALLENGE_LEN
                );
                DEFAULT_CHALLENGE_LEN
            }
        },
    }
}
