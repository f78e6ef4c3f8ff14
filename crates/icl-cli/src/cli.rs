use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "icl",
    about = "Ledger account identifiers, sub-accounts, and token amounts",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Network configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive the account identifier of a principal
    AccountId(AccountIdArgs),
    /// Derive a sub-account from a principal or a text
    Subaccount(SubaccountArgs),
    /// Check the checksum of an account identifier
    Verify(VerifyArgs),
    /// CRC-32 of a text or of hex bytes
    Crc32(Crc32Args),
    /// Render e8s as a decimal amount
    ToDecimal(ToDecimalArgs),
    /// Parse a decimal amount into e8s
    ToE8s(ToE8sArgs),
    /// Hex-encode a text
    Hex(HexArgs),
    /// Decode hex into bytes
    Unhex(UnhexArgs),
    /// Show the effective network configuration
    Config,
}

#[derive(Args)]
pub struct AccountIdArgs {
    /// Principal text; the anonymous principal when omitted
    pub principal: Option<String>,
    /// Sub-account as 64 hex characters
    #[arg(long, conflicts_with = "index")]
    pub subaccount: Option<String>,
    /// Sub-account number, packed into the last 4 bytes
    #[arg(long)]
    pub index: Option<u32>,
}

#[derive(Args)]
pub struct SubaccountArgs {
    #[arg(long, conflicts_with = "text")]
    pub principal: Option<String>,
    #[arg(long)]
    pub text: Option<String>,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub account_id: String,
}

#[derive(Args)]
pub struct Crc32Args {
    pub input: String,
    /// Treat the input as hex bytes
    #[arg(long)]
    pub hex: bool,
}

#[derive(Args)]
pub struct ToDecimalArgs {
    pub e8s: u64,
    #[arg(short, long)]
    pub decimals: Option<u8>,
}

#[derive(Args)]
pub struct ToE8sArgs {
    pub amount: String,
}

#[derive(Args)]
pub struct HexArgs {
    pub text: String,
}

#[derive(Args)]
pub struct UnhexArgs {
    pub hex: String,
}
