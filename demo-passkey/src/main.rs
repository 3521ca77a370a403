use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use web_passkey::{
    CredentialCapabilities, CredentialPlatform, CredentialRequest, PasskeyOptions, PasskeyUser,
    PlatformError, PlatformErrorKind, PlatformSupport, use_passkey,
};

/// Stand-in for a browser: capabilities and outcome come from env vars so the
/// different paths can be tried from a shell.
struct ConsolePlatform {
    capabilities: Option<ConsoleCapabilities>,
    hostname: String,
    reject: bool,
}

struct ConsoleCapabilities {
    uvpa: bool,
    conditional: bool,
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.parse::<bool>().unwrap_or(default))
        .unwrap_or(default)
}

impl ConsolePlatform {
    fn from_env() -> Self {
        let capabilities = env_flag("DEMO_PUBLIC_KEY_CREDENTIAL", true).then(|| {
            ConsoleCapabilities {
                uvpa: env_flag("DEMO_UVPA", true),
                conditional: env_flag("DEMO_CONDITIONAL_MEDIATION", true),
            }
        });

        Self {
            capabilities,
            hostname: env::var("DEMO_HOSTNAME").unwrap_or_else(|_| "localhost".to_string()),
            reject: env_flag("DEMO_REJECT", false),
        }
    }
}

#[async_trait]
impl CredentialCapabilities for ConsoleCapabilities {
    async fn is_user_verifying_platform_authenticator_available(
        &self,
    ) -> Result<bool, PlatformError> {
        Ok(self.uvpa)
    }

    async fn is_conditional_mediation_available(&self) -> Result<bool, PlatformError> {
        Ok(self.conditional)
    }
}

#[async_trait]
impl CredentialPlatform for ConsolePlatform {
    type Credential = serde_json::Value;

    fn capabilities(&self) -> Option<&dyn CredentialCapabilities> {
        self.capabilities
            .as_ref()
            .map(|c| c as &dyn CredentialCapabilities)
    }

    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    async fn create_credential(
        &self,
        request: &CredentialRequest,
    ) -> Result<serde_json::Value, PlatformError> {
        let json = request
            .to_json()
            .map_err(|e| PlatformError::new(PlatformErrorKind::Unknown, e.to_string()))?;
        println!("navigator.credentials.create({{ publicKey: {json} }})");

        if self.reject {
            return Err(PlatformError::not_allowed(
                "The operation either timed out or was not allowed.",
            ));
        }

        Ok(serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "type": "public-key",
            "authenticatorAttachment": request.authenticator_selection.authenticator_attachment,
        }))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = PasskeyOptions::new(PasskeyUser::new(
        uuid::Uuid::new_v4().to_string(),
        "Bankole Emmanuel",
        "thecodeguyy",
    ))
    .with_type(PlatformSupport::Platform);

    let passkey = use_passkey(Arc::new(ConsolePlatform::from_env()), Some(options));

    match passkey.trigger().await {
        Some(credential) => println!("{}", serde_json::to_string_pretty(&credential)?),
        None => println!("null"),
    }

    Ok(())
}
