//! Foundation types for ledger accounts.
//!
//! Everything here is a plain value: derived on demand, compared by its
//! bytes, never mutated. Every other ICL crate depends on `icl-types`.
//!
//! # Key Types
//!
//! - [`Principal`]: Actor identity supplied by the identity layer
//! - [`SubAccount`]: 32-byte partition of a principal's holdings
//! - [`AccountIdentifier`]: Checksum-prefixed ledger address
//! - [`Tokens`]: Amount in e8s (10^8 per token)
//!
//! Leaf codecs live in [`bytes`] (hex, big-endian integers), [`checksum`]
//! (CRC-32) and [`amount`] (decimal text).

pub mod account;
pub mod amount;
pub mod bytes;
pub mod checksum;
pub mod error;
pub mod principal;
pub mod subaccount;

pub use account::{account_identifier_hash, AccountIdentifier, ACCOUNT_HASH_LEN, ACCOUNT_ID_LEN};
pub use amount::{decimal_to_e8s, e8s_to_decimal, Tokens, DECIMALS, E8S_PER_TOKEN};
pub use bytes::{
    ascii_to_bytes, bytes_to_hex, hex_to_bytes, read_u32_be_tail, read_u64_be, write_u32_be_tail,
    write_u64_be,
};
pub use checksum::{crc32, crc32_value, CHECKSUM_LEN};
pub use error::{TypeError, TypeResult};
pub use principal::{parse_principal, principal_or_anonymous, short_principal, Principal};
pub use subaccount::{sub_account_buffer, sub_account_index, SubAccount, SUBACCOUNT_LEN};
