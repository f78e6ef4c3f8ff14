use std::sync::Arc;

use async_trait::async_trait;
use icl_types::{AccountIdentifier, Principal, Tokens};
use tracing::{debug, info, warn};

use crate::config::NetworkConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::kind::ProviderKind;
use crate::provider::{
    ActorConfig, AuthClient, ClientOptions, IdentityProvider, LedgerClient, LoginOptions,
    ScreenSize, TransferRequest, MAX_TIME_TO_LIVE_NS,
};

/// Internet Identity backed provider.
pub struct InternetIdentityProvider {
    client: Arc<dyn AuthClient>,
    ledger: Option<Arc<dyn LedgerClient>>,
    config: NetworkConfig,
    screen: Option<ScreenSize>,
    initialized: bool,
    principal: Option<Principal>,
}

impl InternetIdentityProvider {
    pub fn new(client: Arc<dyn AuthClient>, config: NetworkConfig) -> Self {
        Self {
            client,
            ledger: None,
            config,
            screen: None,
            initialized: false,
            principal: None,
        }
    }

    pub fn with_ledger(mut self, ledger: Arc<dyn LedgerClient>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn with_screen(mut self, screen: ScreenSize) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Login parameters for the configured network.
    pub fn login_options(&self) -> LoginOptions {
        LoginOptions {
            identity_provider: self.config.ii_url.clone(),
            derivation_origin: if self.config.is_production() {
                self.config.app_url.clone()
            } else {
                None
            },
            max_time_to_live_ns: MAX_TIME_TO_LIVE_NS,
            window_features: self.screen.map(|s| s.popup_features()),
        }
    }

    fn ensure_initialized(&self) -> ProviderResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ProviderError::NotInitialized)
        }
    }
}

#[async_trait]
impl IdentityProvider for InternetIdentityProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::InternetIdentity
    }

    async fn initialize(&mut self) -> ProviderResult<bool> {
        self.client
            .init(&ClientOptions { disable_idle: true })
            .await
            .map_err(ProviderError::AuthClient)?;
        self.initialized = true;
        debug!("internet identity client initialized");
        Ok(true)
    }

    async fn connect(&mut self) -> ProviderResult<()> {
        self.ensure_initialized()?;
        let principal = self.client.identity().await.ok_or(ProviderError::MissingIdentity)?;
        info!(principal = %principal, "connected");
        self.principal = Some(principal);
        Ok(())
    }

    async fn is_authenticated(&self) -> bool {
        self.initialized && self.client.is_authenticated().await
    }

    async fn create_actor(&self, canister_id: Principal) -> ProviderResult<ActorConfig> {
        let fetch_root_key = !self.config.is_production();
        if fetch_root_key {
            debug!(canister = %canister_id, "local network; agent must fetch the root key");
        }
        Ok(ActorConfig {
            canister_id,
            host: self.config.gateway(),
            identity: self.principal,
            fetch_root_key,
        })
    }

    fn principal(&self) -> Option<Principal> {
        self.principal
    }

    async fn login(&mut self) -> ProviderResult<()> {
        self.ensure_initialized()?;
        let options = self.login_options();
        debug!(identity_provider = ?options.identity_provider, "starting login");
        self.client.login(&options).await.map_err(|msg| {
            warn!(error = %msg, "login failed");
            ProviderError::LoginFailed(msg)
        })?;
        info!("login succeeded");
        Ok(())
    }

    async fn logout(&mut self) -> ProviderResult<()> {
        if self.initialized {
            self.client.logout().await.map_err(ProviderError::AuthClient)?;
        }
        self.principal = None;
        info!("logged out");
        Ok(())
    }

    async fn transfer_icp(&self, to: &[u8], amount: Tokens, memo: u64) -> ProviderResult<u64> {
        let to = AccountIdentifier::from_slice(to)?;
        let ledger = self.ledger.as_ref().ok_or(ProviderError::LedgerUnavailable)?;
        let from = self.principal.ok_or(ProviderError::NotAuthenticated)?;

        let request = TransferRequest {
            from,
            from_sub_account: None,
            to,
            amount,
            memo,
        };
        let block = ledger.transfer(request).await.map_err(|msg| {
            warn!(to = %to, amount = %amount, error = %msg, "transfer rejected");
            ProviderError::Transfer(msg)
        })?;
        info!(to = %to, amount = %amount, block, "transfer completed");
        Ok(block)
    }
}
