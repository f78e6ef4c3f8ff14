//! Hashing and derivation for ledger accounts.
//!
//! Provides domain-tagged SHA-224/SHA-256 hashing and the two derivations
//! built on it: account identifiers and sub-accounts. All functions are
//! pure and deterministic; each derivation starts from a fresh hash state.
//!
//! All crypto operations wrap established libraries; there is no custom cryptography.

pub mod account;
pub mod hasher;
pub mod subaccount;

pub use account::{derive_account_identifier, derive_default_account_identifier};
pub use hasher::{DomainHasher, SHA224_LEN, SHA256_LEN};
pub use subaccount::{sub_account_from_principal, sub_account_from_text};
