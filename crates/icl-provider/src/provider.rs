use async_trait::async_trait;
use icl_crypto::derive_default_account_identifier;
use icl_types::{AccountIdentifier, Principal, SubAccount, Tokens};
use serde::{Deserialize, Serialize};

use crate::error::ProviderResult;
use crate::kind::ProviderKind;

/// Delegation lifetime requested at login: one week, in nanoseconds.
pub const MAX_TIME_TO_LIVE_NS: u64 = 7 * 24 * 3_600_000_000_000;

/// Width of the login popup, in pixels.
pub const POPUP_WIDTH: u32 = 500;

/// An authentication strategy that yields a caller identity.
///
/// Implementations own their auth session; callers drive it through
/// `initialize` → `login` → `connect` and read the resulting principal.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Prepare the underlying auth client. Returns whether it is usable.
    async fn initialize(&mut self) -> ProviderResult<bool>;

    /// Adopt the auth client's current identity.
    async fn connect(&mut self) -> ProviderResult<()>;

    async fn is_authenticated(&self) -> bool;

    /// Agent settings for calling `canister_id` as the connected identity.
    async fn create_actor(&self, canister_id: Principal) -> ProviderResult<ActorConfig>;

    fn principal(&self) -> Option<Principal>;

    /// Main ledger account of the connected principal.
    fn account_identifier(&self) -> Option<AccountIdentifier> {
        self.principal()
            .map(|p| derive_default_account_identifier(Some(&p)))
    }

    async fn login(&mut self) -> ProviderResult<()>;

    async fn logout(&mut self) -> ProviderResult<()>;

    /// Send `amount` to the 32-byte account identifier `to`. Returns the
    /// ledger block height.
    async fn transfer_icp(&self, to: &[u8], amount: Tokens, memo: u64) -> ProviderResult<u64>;
}

/// Options handed to the auth client when it is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    pub disable_idle: bool,
}

/// Parameters of an interactive login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOptions {
    pub identity_provider: Option<String>,
    pub derivation_origin: Option<String>,
    pub max_time_to_live_ns: u64,
    pub window_features: Option<String>,
}

/// The opaque authentication capability (e.g. an II auth client).
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn init(&self, options: &ClientOptions) -> Result<(), String>;
    async fn identity(&self) -> Option<Principal>;
    async fn is_authenticated(&self) -> bool;
    async fn login(&self, options: &LoginOptions) -> Result<(), String>;
    async fn logout(&self) -> Result<(), String>;
}

/// A ledger transfer as handed to [`LedgerClient`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: Principal,
    pub from_sub_account: Option<SubAccount>,
    pub to: AccountIdentifier,
    pub amount: Tokens,
    pub memo: u64,
}

/// The remote ledger. Returns the block height or the ledger's error text.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn transfer(&self, request: TransferRequest) -> Result<u64, String>;
}

/// Everything needed to build an agent + actor for one canister.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorConfig {
    pub canister_id: Principal,
    pub host: Option<String>,
    pub identity: Option<Principal>,
    /// Local replicas sign with a throwaway root key that must be fetched.
    pub fetch_root_key: bool,
}

/// Screen dimensions used to place the login popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `window.open` features for a full-height popup centred on screen.
    pub fn popup_features(&self) -> String {
        let height = self.height;
        let left = (i64::from(self.width) - i64::from(POPUP_WIDTH)) / 2;
        let top = (i64::from(self.height) - i64::from(height)) / 2;
        format!(
            "toolbar=0,location=0,menubar=0,width={POPUP_WIDTH},height={height},top={top},left={left}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_week_ttl() {
        assert_eq!(MAX_TIME_TO_LIVE_NS, 604_800_000_000_000);
    }

    #[test]
    fn popup_is_centred() {
        let features = ScreenSize::new(1920, 1080).popup_features();
        assert_eq!(
            features,
            "toolbar=0,location=0,menubar=0,width=500,height=1080,top=0,left=710"
        );
    }

    #[test]
    fn popup_offset_truncates() {
        assert!(ScreenSize::new(1365, 768).popup_features().ends_with("left=432"));
        assert!(ScreenSize::new(401, 600).popup_features().ends_with("left=-49"));
    }
}
