use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use super::authenticate::WebPasskey;

use crate::passkey::platform::CredentialPlatform;
use crate::passkey::types::PasskeyOptions;

/// Zero-argument handle that runs one passkey creation per call.
pub struct PasskeyTrigger<P: CredentialPlatform> {
    passkey: Arc<WebPasskey<P>>,
}

/// Builds a [`PasskeyTrigger`] for `options` on `platform`.
///
/// Starts a background support probe whose only effect is a log line; it
/// never gates the returned trigger.
pub fn use_passkey<P>(platform: Arc<P>, options: Option<PasskeyOptions>) -> PasskeyTrigger<P>
where
    P: CredentialPlatform + 'static,
{
    PasskeyTrigger::new(WebPasskey::new(platform, options))
}

impl<P> PasskeyTrigger<P>
where
    P: CredentialPlatform + 'static,
{
    pub fn new(passkey: WebPasskey<P>) -> Self {
        let passkey = Arc::new(passkey);
        spawn_support_probe(Arc::clone(&passkey));
        Self { passkey }
    }

    pub fn passkey(&self) -> &WebPasskey<P> {
        &self.passkey
    }

    /// Runs `authenticate()`. A panic inside the platform binding is caught
    /// and reported as `None` like every other failure.
    ///
    /// Runs on whatever executor polls it; no tokio runtime is required.
    pub async fn trigger(&self) -> Option<P::Credential> {
        match AssertUnwindSafe(self.passkey.authenticate())
            .catch_unwind()
            .await
        {
            Ok(credential) => credential,
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!("Passkey trigger failed: {}", reason);
                None
            }
        }
    }
}

impl<P: CredentialPlatform> Clone for PasskeyTrigger<P> {
    fn clone(&self) -> Self {
        Self {
            passkey: Arc::clone(&self.passkey),
        }
    }
}

fn spawn_support_probe<P>(passkey: Arc<WebPasskey<P>>)
where
    P: CredentialPlatform + 'static,
{
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::warn!("No async runtime, skipping passkey support probe");
        return;
    };

    handle.spawn(async move {
        if passkey.is_supported().await {
            tracing::debug!("Passkey is supported on this device");
        } else {
            tracing::info!("Passkey is not Supported for this device");
        }
    });
}
