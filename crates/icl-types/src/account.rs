use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::{crc32, crc32_value, CHECKSUM_LEN};
use crate::error::{TypeError, TypeResult};

/// Width of an account identifier.
pub const ACCOUNT_ID_LEN: usize = 32;
/// Width of the hash part (SHA-224 digest).
pub const ACCOUNT_HASH_LEN: usize = 28;

/// Ledger address of a principal + sub-account pair.
///
/// Layout: `crc32(hash)` big-endian (4 bytes) followed by the 28-byte hash.
/// Anything parsed from the outside is checked against that prefix; only
/// [`AccountIdentifier::from_hash`] and
/// [`AccountIdentifier::from_bytes_unchecked`] skip the check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountIdentifier([u8; ACCOUNT_ID_LEN]);

impl AccountIdentifier {
    /// Prefix a 28-byte hash with its checksum.
    pub fn from_hash(hash: [u8; ACCOUNT_HASH_LEN]) -> Self {
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        bytes[..CHECKSUM_LEN].copy_from_slice(&crc32(&hash));
        bytes[CHECKSUM_LEN..].copy_from_slice(&hash);
        Self(bytes)
    }

    /// Wrap raw bytes without checking the checksum.
    pub fn from_bytes_unchecked(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse 32 bytes and verify the checksum prefix.
    pub fn from_slice(bytes: &[u8]) -> TypeResult<Self> {
        if bytes.len() < ACCOUNT_ID_LEN {
            return Err(TypeError::BufferTooSmall {
                required: ACCOUNT_ID_LEN,
                actual: bytes.len(),
            });
        }
        if bytes.len() > ACCOUNT_ID_LEN {
            return Err(TypeError::InvalidLength {
                expected: ACCOUNT_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; ACCOUNT_ID_LEN];
        arr.copy_from_slice(bytes);
        let id = Self(arr);
        id.verify()?;
        Ok(id)
    }

    /// Parse 64 hex characters and verify the checksum prefix.
    pub fn from_hex(s: &str) -> TypeResult<Self> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidEncoding(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Check that the leading 4 bytes are the CRC-32 of the trailing 28.
    pub fn verify(&self) -> TypeResult<()> {
        let stored = u32::from_be_bytes(self.checksum());
        let computed = crc32_value(&self.0[CHECKSUM_LEN..]);
        if stored != computed {
            return Err(TypeError::ChecksumMismatch {
                expected: computed,
                actual: stored,
            });
        }
        Ok(())
    }

    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&self.0[..CHECKSUM_LEN]);
        out
    }

    pub fn hash(&self) -> [u8; ACCOUNT_HASH_LEN] {
        let mut out = [0u8; ACCOUNT_HASH_LEN];
        out.copy_from_slice(&self.0[CHECKSUM_LEN..]);
        out
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// Lowercase hex, the form ledgers and explorers print.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Uppercase hex, the form the web front end prints.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.0)
    }
}

/// Decode a hex account identifier and return its hash part,
/// dropping the checksum prefix without verifying it.
pub fn account_identifier_hash(hex_text: &str) -> TypeResult<[u8; ACCOUNT_HASH_LEN]> {
    let bytes = hex::decode(hex_text).map_err(|e| TypeError::InvalidEncoding(e.to_string()))?;
    if bytes.len() != ACCOUNT_ID_LEN {
        return Err(TypeError::InvalidLength {
            expected: ACCOUNT_ID_LEN,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; ACCOUNT_HASH_LEN];
    out.copy_from_slice(&bytes[CHECKSUM_LEN..]);
    Ok(out)
}

impl fmt::Debug for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountIdentifier({})", self.to_hex())
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for AccountIdentifier {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<AccountIdentifier> for [u8; ACCOUNT_ID_LEN] {
    fn from(id: AccountIdentifier) -> Self {
        id.0
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
