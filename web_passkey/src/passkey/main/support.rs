use crate::passkey::platform::CredentialCapabilities;

/// Probes both capability flags and reports whether passkeys can be created.
///
/// Both queries are issued together and awaited jointly. A missing capability
/// object, a `false` flag, or a failing probe all count as unsupported.
pub(crate) async fn probe_capabilities(capabilities: Option<&dyn CredentialCapabilities>) -> bool {
    let Some(capabilities) = capabilities else {
        tracing::debug!("No public key credential object on this platform");
        return false;
    };

    let (uvpa, conditional) = tokio::join!(
        capabilities.is_user_verifying_platform_authenticator_available(),
        capabilities.is_conditional_mediation_available()
    );

    tracing::debug!(
        "Capability probe: user verifying platform authenticator: {:?}, conditional mediation: {:?}",
        uvpa,
        conditional
    );

    matches!((uvpa, conditional), (Ok(true), Ok(true)))
}
