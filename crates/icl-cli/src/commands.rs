use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use icl_crypto::{derive_account_identifier, sub_account_from_principal, sub_account_from_text};
use icl_provider::NetworkConfig;
use icl_types::{
    bytes_to_hex, crc32, decimal_to_e8s, e8s_to_decimal, hex_to_bytes, parse_principal,
    principal_or_anonymous, AccountIdentifier, SubAccount,
};
use tracing::debug;

use crate::cli::*;

/// Named results of one command, printed as text or JSON.
struct Report {
    fields: Vec<(&'static str, String)>,
}

impl Report {
    fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    fn emit(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            }
            OutputFormat::Text => {
                for (key, value) in &self.fields {
                    println!("{:>12}: {}", key.bold(), value);
                }
            }
        }
        Ok(())
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let report = match cli.command {
        Command::AccountId(args) => cmd_account_id(args)?,
        Command::Subaccount(args) => cmd_subaccount(args)?,
        Command::Verify(args) => cmd_verify(args)?,
        Command::Crc32(args) => cmd_crc32(args)?,
        Command::ToDecimal(args) => cmd_to_decimal(args)?,
        Command::ToE8s(args) => cmd_to_e8s(args)?,
        Command::Hex(args) => cmd_hex(args),
        Command::Unhex(args) => cmd_unhex(args)?,
        Command::Config => cmd_config(cli.config.as_deref())?,
    };
    report.emit(cli.format)
}

fn cmd_account_id(args: AccountIdArgs) -> anyhow::Result<Report> {
    let principal = args
        .principal
        .as_deref()
        .map(parse_principal)
        .transpose()
        .context("parsing principal")?;
    let sub_account = match (args.subaccount.as_deref(), args.index) {
        (Some(hex), _) => SubAccount::from_hex(hex).context("parsing sub-account")?,
        (None, Some(index)) => SubAccount::from_index(index),
        (None, None) => SubAccount::default(),
    };
    let id = derive_account_identifier(principal.as_ref(), Some(&sub_account));
    debug!(account_id = %id, "derived account identifier");

    Ok(Report::new()
        .field("principal", principal_or_anonymous(principal.as_ref()).to_text())
        .field("subaccount", sub_account.to_hex())
        .field("account_id", id.to_hex()))
}

fn cmd_subaccount(args: SubaccountArgs) -> anyhow::Result<Report> {
    let sub_account = match args.principal.as_deref() {
        Some(text) => {
            let principal = parse_principal(text).context("parsing principal")?;
            sub_account_from_principal(Some(&principal))
        }
        None => sub_account_from_text(args.text.as_deref()),
    };
    Ok(Report::new()
        .field("subaccount", sub_account.to_hex())
        .field("index", sub_account.index().to_string()))
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<Report> {
    let id = AccountIdentifier::from_hex(args.account_id.trim())
        .with_context(|| format!("{} is not a valid account identifier", args.account_id))?;
    Ok(Report::new()
        .field("account_id", id.to_hex())
        .field("checksum", hex::encode(id.checksum()))
        .field("status", "valid"))
}

fn cmd_crc32(args: Crc32Args) -> anyhow::Result<Report> {
    let bytes = if args.hex {
        hex_to_bytes(&args.input).context("parsing hex input")?
    } else {
        args.input.into_bytes()
    };
    Ok(Report::new().field("crc32", hex::encode(crc32(&bytes))))
}

fn cmd_to_decimal(args: ToDecimalArgs) -> anyhow::Result<Report> {
    let text = e8s_to_decimal(args.e8s, args.decimals)?;
    Ok(Report::new().field("amount", text))
}

fn cmd_to_e8s(args: ToE8sArgs) -> anyhow::Result<Report> {
    let e8s = decimal_to_e8s(&args.amount)
        .with_context(|| format!("parsing amount {:?}", args.amount))?;
    Ok(Report::new().field("e8s", e8s.to_string()))
}

fn cmd_hex(args: HexArgs) -> Report {
    Report::new().field("hex", bytes_to_hex(args.text.as_bytes()))
}

fn cmd_unhex(args: UnhexArgs) -> anyhow::Result<Report> {
    let bytes = hex_to_bytes(&args.hex).context("parsing hex input")?;
    Ok(Report::new()
        .field("length", bytes.len().to_string())
        .field("text", String::from_utf8_lossy(&bytes).into_owned()))
}

fn cmd_config(path: Option<&Path>) -> anyhow::Result<Report> {
    let base = match path {
        Some(path) => NetworkConfig::load(path)?,
        None => NetworkConfig::default(),
    };
    let config = base.apply_env(|key| std::env::var(key).ok());
    let ledger = config.ledger_canister()?;
    let unset = || "(not set)".to_string();

    Ok(Report::new()
        .field("network", format!("{:?}", config.network).to_lowercase())
        .field("production", config.is_production().to_string())
        .field("gateway", config.gateway().unwrap_or_else(unset))
        .field("ii_url", config.ii_url.clone().unwrap_or_else(unset))
        .field("app_url", config.app_url.clone().unwrap_or_else(unset))
        .field("ledger", ledger.to_text()))
}
