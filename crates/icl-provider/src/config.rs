use std::path::Path;

use icl_types::{parse_principal, Principal};
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};

/// Boundary node used on mainnet when no gateway is configured.
pub const MAINNET_GATEWAY: &str = "https://ic0.app";

/// Environment variables read by [`NetworkConfig::apply_env`].
pub const ENV_NETWORK: &str = "ICL_NETWORK";
pub const ENV_IC_GATEWAY: &str = "ICL_IC_GATEWAY";
pub const ENV_IC_URL: &str = "ICL_IC_URL";
pub const ENV_II_URL: &str = "ICL_II_URL";
pub const ENV_APP_URL: &str = "ICL_APP_URL";
pub const ENV_LEDGER_CANISTER_ID: &str = "ICL_LEDGER_CANISTER_ID";

/// Which replica the application talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// A local development replica.
    #[default]
    Local,
    /// Mainnet.
    Ic,
}

impl Network {
    /// `"ic"` selects mainnet; every other name is a local replica.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("ic") {
            Self::Ic
        } else {
            Self::Local
        }
    }
}

/// Endpoints and canister ids the providers need.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub network: Network,
    /// Agent host. Falls back to [`MAINNET_GATEWAY`] on mainnet.
    pub ic_gateway: Option<String>,
    pub ic_url: Option<String>,
    /// Internet Identity frontend used for login.
    pub ii_url: Option<String>,
    /// Application origin, used as the login derivation origin on mainnet.
    pub app_url: Option<String>,
    /// Text principal of the ledger canister. Anonymous when unset.
    pub ledger_canister_id: Option<String>,
}

impl NetworkConfig {
    pub fn is_production(&self) -> bool {
        self.network == Network::Ic
    }

    /// Host an agent should talk to. `None` means the agent default.
    pub fn gateway(&self) -> Option<String> {
        match (&self.ic_gateway, self.network) {
            (Some(gateway), _) => Some(gateway.clone()),
            (None, Network::Ic) => Some(MAINNET_GATEWAY.to_string()),
            (None, Network::Local) => None,
        }
    }

    pub fn ledger_canister(&self) -> ProviderResult<Principal> {
        match &self.ledger_canister_id {
            Some(text) => Ok(parse_principal(text)?),
            None => Ok(Principal::anonymous()),
        }
    }

    pub fn from_toml_str(s: &str) -> ProviderResult<Self> {
        toml::from_str(s).map_err(|e| ProviderError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ProviderResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ProviderResult<String> {
        toml::to_string(self).map_err(|e| ProviderError::Config(e.to_string()))
    }

    /// Override fields from environment-style variables. `lookup` stands in
    /// for `std::env::var` so callers (and tests) choose the source.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_NETWORK) {
            self.network = Network::from_name(&name);
        }
        let overrides = [
            (ENV_IC_GATEWAY, &mut self.ic_gateway),
            (ENV_IC_URL, &mut self.ic_url),
            (ENV_II_URL, &mut self.ii_url),
            (ENV_APP_URL, &mut self.app_url),
            (ENV_LEDGER_CANISTER_ID, &mut self.ledger_canister_id),
        ];
        for (key, field) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *field = Some(value);
            }
        }
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config() {
        let c = NetworkConfig::default();
        assert_eq!(c.network, Network::Local);
        assert!(!c.is_production());
        assert_eq!(c.gateway(), None);
        assert_eq!(c.ledger_canister().unwrap(), Principal::anonymous());
    }

    #[test]
    fn mainnet_gateway_default() {
        let c = NetworkConfig { network: Network::Ic, ..Default::default() };
        assert!(c.is_production());
        assert_eq!(c.gateway().as_deref(), Some(MAINNET_GATEWAY));
    }

    #[test]
    fn explicit_gateway_wins() {
        let c = NetworkConfig {
            network: Network::Ic,
            ic_gateway: Some("https://icp-api.io".into()),
            ..Default::default()
        };
        assert_eq!(c.gateway().as_deref(), Some("https://icp-api.io"));
    }

    #[test]
    fn network_names() {
        assert_eq!(Network::from_name("ic"), Network::Ic);
        assert_eq!(Network::from_name("IC "), Network::Ic);
        assert_eq!(Network::from_name("local"), Network::Local);
        assert_eq!(Network::from_name("playground"), Network::Local);
    }

    #[test]
    fn parse_toml() {
        let c = NetworkConfig::from_toml_str(
            r#"
            network = "ic"
            ii_url = "https://identity.ic0.app"
            ledger_canister_id = "ryjl3-tyaaa-aaaaa-aaaba-cai"
            "#,
        )
        .unwrap();
        assert!(c.is_production());
        assert_eq!(c.ii_url.as_deref(), Some("https://identity.ic0.app"));
        assert_eq!(c.ledger_canister().unwrap().to_text(), "ryjl3-tyaaa-aaaaa-aaaba-cai");
        assert_eq!(c.app_url, None);
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            NetworkConfig::from_toml_str("network = 5"),
            Err(ProviderError::Config(_))
        ));
    }

    #[test]
    fn bad_ledger_id_is_type_error() {
        let c = NetworkConfig { ledger_canister_id: Some("nope".into()), ..Default::default() };
        assert!(matches!(c.ledger_canister(), Err(ProviderError::Type(_))));
    }

    #[test]
    fn toml_roundtrip() {
        let c = NetworkConfig {
            network: Network::Ic,
            app_url: Some("https://meme.bot".into()),
            ..Default::default()
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(NetworkConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "network = \"local\"\nii_url = \"http://localhost:4943\"").unwrap();
        let c = NetworkConfig::load(file.path()).unwrap();
        assert_eq!(c.ii_url.as_deref(), Some("http://localhost:4943"));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = NetworkConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ProviderError::Config(_))));
    }

    #[test]
    fn env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_NETWORK, "ic"),
            (ENV_APP_URL, "https://meme.bot"),
            (ENV_II_URL, ""),
        ]
        .into_iter()
        .collect();
        let base = NetworkConfig { ii_url: Some("https://id.example".into()), ..Default::default() };
        let c = base.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert!(c.is_production());
        assert_eq!(c.app_url.as_deref(), Some("https://meme.bot"));
        assert_eq!(c.ii_url.as_deref(), Some("https://id.example"));
    }
}
