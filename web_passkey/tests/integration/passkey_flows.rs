use std::sync::Arc;

use web_passkey::{
    AttestationConveyancePreference, AuthenticatorAttachment, Challenge, PasskeyConfig,
    PasskeyError, PlatformError, RandomChallenge, WebPasskey,
};

use crate::common::{
    BrowserCredential, MockBrowser, TEST_HOSTNAME, ann_options, numeric_id_options, test_config,
};

/// Both capabilities present, creation succeeds: the credential comes back and
/// the request carries the fixed WebAuthn parameters.
#[tokio::test]
async fn test_platform_passkey_creation() -> Result<(), Box<dyn std::error::Error>> {
    let browser = Arc::new(MockBrowser::passkey_capable());
    let passkey =
        WebPasskey::with_config(Arc::clone(&browser), Some(ann_options()), test_config());

    let credential = passkey.authenticate().await;
    assert_eq!(
        credential,
        Some(BrowserCredential {
            id: "cred-1".to_string(),
            user_handle: b"u1".to_vec(),
            challenge: vec![0u8; 16],
        })
    );

    let requests = browser.requests();
    assert_eq!(requests.len(), 1, "exactly one platform call");
    let request = &requests[0];
    assert_eq!(request.rp.id, TEST_HOSTNAME);
    assert_eq!(request.rp.name, TEST_HOSTNAME);
    assert_eq!(request.user.name, "Ann");
    assert_eq!(request.user.display_name, "Ann A");
    assert_eq!(request.pub_key_cred_params.len(), 1);
    assert_eq!(request.pub_key_cred_params[0].alg, -7);
    assert_eq!(request.attestation, AttestationConveyancePreference::None);
    assert_eq!(
        request.authenticator_selection.authenticator_attachment,
        AuthenticatorAttachment::Platform
    );

    let json: serde_json::Value = serde_json::from_str(&request.to_json()?)?;
    assert_eq!(json["rp"]["id"], TEST_HOSTNAME);
    assert_eq!(json["attestation"], "none");

    Ok(())
}

#[tokio::test]
async fn test_numeric_user_id_and_cross_platform() {
    let browser = Arc::new(MockBrowser::passkey_capable());
    let passkey = WebPasskey::with_config(
        Arc::clone(&browser),
        Some(numeric_id_options()),
        test_config(),
    );

    let credential = passkey.authenticate().await.expect("credential");
    assert_eq!(credential.user_handle, b"1234567".to_vec());

    let request = &browser.requests()[0];
    assert_eq!(
        request.authenticator_selection.authenticator_attachment,
        AuthenticatorAttachment::CrossPlatform
    );
}

#[tokio::test]
async fn test_unrecognized_type_falls_back_to_cross_platform() {
    let browser = Arc::new(MockBrowser::passkey_capable());
    let options = ann_options().with_type("hybrid");
    let passkey = WebPasskey::with_config(Arc::clone(&browser), Some(options), test_config());

    passkey.authenticate().await.expect("credential");
    assert_eq!(
        browser.requests()[0]
            .authenticator_selection
            .authenticator_attachment,
        AuthenticatorAttachment::CrossPlatform
    );
}

#[tokio::test]
async fn test_unsupported_flags_return_none_without_platform_call() {
    for (uvpa, conditional) in [(false, false), (true, false), (false, true)] {
        let browser = Arc::new(MockBrowser::with_flags(uvpa, conditional));
        let passkey =
            WebPasskey::with_config(Arc::clone(&browser), Some(ann_options()), test_config());

        assert!(!passkey.is_supported().await);
        assert!(passkey.authenticate().await.is_none());
        assert!(browser.requests().is_empty());
    }
}

#[tokio::test]
async fn test_legacy_browser_returns_none() {
    let browser = Arc::new(MockBrowser::legacy());
    let passkey =
        WebPasskey::with_config(Arc::clone(&browser), Some(ann_options()), test_config());

    assert!(matches!(
        passkey.try_authenticate().await,
        Err(PasskeyError::UnsupportedDevice)
    ));
    assert!(browser.requests().is_empty());
}

#[tokio::test]
async fn test_missing_options_returns_none() {
    let browser = Arc::new(MockBrowser::passkey_capable());
    let passkey = WebPasskey::with_config(Arc::clone(&browser), None, test_config());

    assert!(passkey.is_supported().await);
    assert!(matches!(
        passkey.try_authenticate().await,
        Err(PasskeyError::MissingConfiguration)
    ));
    assert!(browser.requests().is_empty());
}

/// The user dismisses the passkey sheet
#[tokio::test]
async fn test_user_cancellation_returns_none() {
    let browser = Arc::new(MockBrowser::passkey_capable().rejecting_with(
        PlatformError::not_allowed("The operation either timed out or was not allowed."),
    ));
    let passkey =
        WebPasskey::with_config(Arc::clone(&browser), Some(ann_options()), test_config());

    assert!(passkey.authenticate().await.is_none());
    assert_eq!(browser.requests().len(), 1);
}

#[tokio::test]
async fn test_challenge_sources() {
    let browser = Arc::new(MockBrowser::passkey_capable());

    let raw = vec![0xff, 0x00, 0xc3, 0x28];
    let passkey = WebPasskey::with_config(
        Arc::clone(&browser),
        Some(ann_options().with_challenge(raw.clone())),
        test_config(),
    );
    let credential = passkey.authenticate().await.expect("credential");
    assert_eq!(credential.challenge, raw, "raw bytes pass through");

    let passkey = WebPasskey::with_config(
        Arc::clone(&browser),
        Some(ann_options().with_challenge(Challenge::producer(|| async {
            b"server-nonce".to_vec()
        }))),
        test_config(),
    );
    let credential = passkey.authenticate().await.expect("credential");
    assert_eq!(credential.challenge, b"server-nonce".to_vec());

    let passkey = WebPasskey::with_config(
        Arc::clone(&browser),
        Some(ann_options().with_challenge(Challenge::producer(RandomChallenge { len: 32 }))),
        test_config(),
    );
    let credential = passkey.authenticate().await.expect("credential");
    assert_eq!(credential.challenge.len(), 32);
}

#[tokio::test]
async fn test_double_probe_compatibility_mode() {
    let browser = Arc::new(MockBrowser::passkey_capable());
    let config = PasskeyConfig {
        double_probe: true,
        ..test_config()
    };
    let passkey = WebPasskey::with_config(Arc::clone(&browser), Some(ann_options()), config);

    assert!(passkey.authenticate().await.is_some());
    assert_eq!(browser.probe_count(), 4, "two flags probed twice");
}
