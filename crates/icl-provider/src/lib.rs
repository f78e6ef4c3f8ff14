//! Identity providers for ledger accounts.
//!
//! A provider turns an opaque authentication capability into a caller
//! [`Principal`](icl_types::Principal), and hands out what the ledger layer
//! needs: agent settings, the caller's account identifier, and transfers.
//! Network transport stays behind the [`AuthClient`] and [`LedgerClient`]
//! traits.

pub mod config;
pub mod error;
pub mod factory;
pub mod ii;
pub mod kind;
pub mod provider;

pub use config::{Network, NetworkConfig, MAINNET_GATEWAY};
pub use error::{ProviderError, ProviderResult};
pub use factory::{create_provider, ProviderContext, ProviderFactory};
pub use ii::InternetIdentityProvider;
pub use kind::{MemoryPreferences, PreferenceStore, ProviderKind, PROVIDER_TYPE_KEY};
pub use provider::{
    ActorConfig, AuthClient, ClientOptions, IdentityProvider, LedgerClient, LoginOptions,
    ScreenSize, TransferRequest, MAX_TIME_TO_LIVE_NS,
};
