use std::sync::Arc;

use super::request::build_credential_request;
use super::support::probe_capabilities;

use crate::passkey::config::{PASSKEY_CONFIG, PasskeyConfig};
use crate::passkey::errors::PasskeyError;
use crate::passkey::platform::CredentialPlatform;
use crate::passkey::types::PasskeyOptions;

/// Passkey creation wrapper bound to one platform and one set of options.
///
/// `authenticate()` always resolves: either to the platform's credential or
/// to `None`. Failures are logged, never returned.
pub struct WebPasskey<P: CredentialPlatform> {
    platform: Arc<P>,
    options: Option<PasskeyOptions>,
    config: PasskeyConfig,
}

impl<P: CredentialPlatform> WebPasskey<P> {
    /// Creates a wrapper using the process-wide configuration.
    pub fn new(platform: Arc<P>, options: Option<PasskeyOptions>) -> Self {
        Self::with_config(platform, options, PASSKEY_CONFIG.clone())
    }

    pub fn with_config(
        platform: Arc<P>,
        options: Option<PasskeyOptions>,
        config: PasskeyConfig,
    ) -> Self {
        Self {
            platform,
            options,
            config,
        }
    }

    pub fn options(&self) -> Option<&PasskeyOptions> {
        self.options.as_ref()
    }

    pub fn config(&self) -> &PasskeyConfig {
        &self.config
    }

    /// Whether the platform exposes a credential object with both a
    /// user-verifying platform authenticator and conditional mediation.
    pub async fn is_supported(&self) -> bool {
        probe_capabilities(self.platform.capabilities()).await
    }

    /// Creates a passkey, returning `None` on any failure.
    pub async fn authenticate(&self) -> Option<P::Credential> {
        self.try_authenticate().await.ok()
    }

    /// Creates a passkey, reporting why it could not.
    ///
    /// 1. Support gate (and the optional second probe)
    /// 2. Options present
    /// 3. Request assembled from options and hostname
    /// 4. One platform creation call
    pub async fn try_authenticate(&self) -> Result<P::Credential, PasskeyError> {
        if !self.is_supported().await {
            tracing::error!("Device not supported");
            return Err(PasskeyError::UnsupportedDevice);
        }

        if self.config.double_probe && !self.is_supported().await {
            tracing::info!("This device does not support passkeys.");
            return Err(PasskeyError::UnsupportedDevice);
        }

        let Some(options) = self.options.as_ref() else {
            tracing::info!("Passkey cannot be initialized, No configuration defined");
            return Err(PasskeyError::MissingConfiguration);
        };

        let hostname = self.platform.hostname();
        let request = build_credential_request(options, &hostname, &self.config).await?;

        let credential = self
            .platform
            .create_credential(&request)
            .await
            .map_err(|e| {
                tracing::error!("Credential creation failed: {}", e);
                PasskeyError::Platform(e)
            })?;

        tracing::debug!("Passkey created for rp: {}", request.rp.id);

        Ok(credential)
    }
}
