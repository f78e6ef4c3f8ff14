use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::config::NetworkConfig;
use crate::ii::InternetIdentityProvider;
use crate::kind::{PreferenceStore, ProviderKind, PROVIDER_TYPE_KEY};
use crate::provider::{AuthClient, IdentityProvider, LedgerClient, ScreenSize};

/// Collaborators a provider is built from.
#[derive(Clone)]
pub struct ProviderContext {
    pub config: NetworkConfig,
    pub auth: Arc<dyn AuthClient>,
    pub ledger: Option<Arc<dyn LedgerClient>>,
    pub screen: Option<ScreenSize>,
}

impl ProviderContext {
    pub fn new(config: NetworkConfig, auth: Arc<dyn AuthClient>) -> Self {
        Self {
            config,
            auth,
            ledger: None,
            screen: None,
        }
    }
}

/// Construct the provider for `kind`.
pub fn create_provider(kind: ProviderKind, ctx: &ProviderContext) -> Box<dyn IdentityProvider> {
    match kind {
        ProviderKind::InternetIdentity => {
            let mut provider = InternetIdentityProvider::new(ctx.auth.clone(), ctx.config.clone());
            if let Some(ledger) = &ctx.ledger {
                provider = provider.with_ledger(ledger.clone());
            }
            if let Some(screen) = ctx.screen {
                provider = provider.with_screen(screen);
            }
            Box::new(provider)
        }
    }
}

/// The set of provider kinds an application offers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderFactory {
    enabled: BTreeSet<ProviderKind>,
}

impl ProviderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_internet_identity(self) -> Self {
        self.with(ProviderKind::InternetIdentity)
    }

    pub fn with(mut self, kind: ProviderKind) -> Self {
        self.enabled.insert(kind);
        self
    }

    pub fn enabled(&self) -> &BTreeSet<ProviderKind> {
        &self.enabled
    }

    pub fn is_enabled(&self, kind: ProviderKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// Which provider to build.
    ///
    /// An explicit kind is always honoured. Otherwise the persisted
    /// preference is used, but only if it names an enabled kind.
    pub fn resolve(
        &self,
        kind: Option<ProviderKind>,
        prefs: &dyn PreferenceStore,
    ) -> Option<ProviderKind> {
        if kind.is_some() {
            return kind;
        }
        let stored = prefs.get(PROVIDER_TYPE_KEY)?;
        match stored.parse::<ProviderKind>() {
            Ok(kind) if self.is_enabled(kind) => Some(kind),
            Ok(kind) => {
                debug!(%kind, "stored provider is not enabled");
                None
            }
            Err(e) => {
                debug!(error = %e, "ignoring stored provider preference");
                None
            }
        }
    }

    pub fn build(
        &self,
        kind: Option<ProviderKind>,
        prefs: &dyn PreferenceStore,
        ctx: &ProviderContext,
    ) -> Option<Box<dyn IdentityProvider>> {
        let kind = self.resolve(kind, prefs)?;
        debug!(%kind, "building identity provider");
        Some(create_provider(kind, ctx))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use icl_types::Principal;

    use super::*;
    use crate::kind::MemoryPreferences;
    use crate::provider::{ClientOptions, LoginOptions};

    struct NoAuth;

    #[async_trait]
    impl AuthClient for NoAuth {
        async fn init(&self, _options: &ClientOptions) -> Result<(), String> {
            Ok(())
        }
        async fn identity(&self) -> Option<Principal> {
            None
        }
        async fn is_authenticated(&self) -> bool {
            false
        }
        async fn login(&self, _options: &LoginOptions) -> Result<(), String> {
            Err("no popup".into())
        }
        async fn logout(&self) -> Result<(), String> {
            Ok(())
        }
    }

    fn ctx() -> ProviderContext {
        ProviderContext::new(NetworkConfig::default(), Arc::new(NoAuth))
    }

    fn stored(value: &str) -> MemoryPreferences {
        let mut prefs = MemoryPreferences::new();
        prefs.set(PROVIDER_TYPE_KEY, value);
        prefs
    }

    #[test]
    fn builder_accumulates_kinds() {
        let factory = ProviderFactory::new().with_internet_identity().with_internet_identity();
        assert_eq!(factory.enabled().len(), 1);
        assert!(factory.is_enabled(ProviderKind::InternetIdentity));
        assert!(!ProviderFactory::new().is_enabled(ProviderKind::InternetIdentity));
    }

    #[test]
    fn explicit_kind_is_always_built() {
        let factory = ProviderFactory::new();
        let provider = factory
            .build(Some(ProviderKind::InternetIdentity), &MemoryPreferences::new(), &ctx())
            .unwrap();
        assert_eq!(provider.kind(), ProviderKind::InternetIdentity);
    }

    #[test]
    fn stored_preference_selects_enabled_kind() {
        let factory = ProviderFactory::new().with_internet_identity();
        let provider = factory.build(None, &stored("InternetIdentity"), &ctx());
        assert_eq!(provider.map(|p| p.kind()), Some(ProviderKind::InternetIdentity));
    }

    #[test]
    fn stored_preference_must_be_enabled() {
        let factory = ProviderFactory::new();
        assert!(factory.build(None, &stored("InternetIdentity"), &ctx()).is_none());
    }

    #[test]
    fn missing_or_unknown_preference() {
        let factory = ProviderFactory::new().with_internet_identity();
        assert!(factory.build(None, &MemoryPreferences::new(), &ctx()).is_none());
        assert!(factory.build(None, &stored("Plug"), &ctx()).is_none());
    }

    #[test]
    fn closure_preferences() {
        let factory = ProviderFactory::new().with_internet_identity();
        let prefs = |_: &str| Some("InternetIdentity".to_string());
        assert_eq!(factory.resolve(None, &prefs), Some(ProviderKind::InternetIdentity));
    }

    #[tokio::test]
    async fn built_provider_is_usable() {
        let mut provider = create_provider(ProviderKind::InternetIdentity, &ctx());
        assert!(provider.initialize().await.unwrap());
        assert!(!provider.is_authenticated().await);
        assert!(provider.login().await.is_err());
    }
}
