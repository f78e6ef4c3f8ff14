use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bytes::{read_u32_be_tail, write_u32_be_tail};
use crate::error::{TypeError, TypeResult};

/// Width of a sub-account.
pub const SUBACCOUNT_LEN: usize = 32;

/// A 32-byte partition of one principal's holdings.
///
/// The default (all zeros) is the principal's main account.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubAccount([u8; SUBACCOUNT_LEN]);

impl SubAccount {
    pub const fn new(bytes: [u8; SUBACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    /// Sub-account number `index`, stored big-endian in the last 4 bytes.
    pub fn from_index(index: u32) -> Self {
        let mut bytes = [0u8; SUBACCOUNT_LEN];
        bytes[SUBACCOUNT_LEN - 4..].copy_from_slice(&index.to_be_bytes());
        Self(bytes)
    }

    /// The index packed into the last 4 bytes.
    pub fn index(&self) -> u32 {
        let tail = &self.0[SUBACCOUNT_LEN - 4..];
        u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]])
    }

    pub fn from_slice(bytes: &[u8]) -> TypeResult<Self> {
        if bytes.len() < SUBACCOUNT_LEN {
            return Err(TypeError::BufferTooSmall {
                required: SUBACCOUNT_LEN,
                actual: bytes.len(),
            });
        }
        if bytes.len() > SUBACCOUNT_LEN {
            return Err(TypeError::InvalidLength {
                expected: SUBACCOUNT_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; SUBACCOUNT_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    pub fn from_hex(s: &str) -> TypeResult<Self> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidEncoding(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; SUBACCOUNT_LEN] {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == [0u8; SUBACCOUNT_LEN]
    }
}

/// Index of an arbitrary-width sub-account buffer (last 4 bytes).
pub fn sub_account_index(bytes: &[u8]) -> TypeResult<u32> {
    read_u32_be_tail(bytes)
}

/// A `len`-byte sub-account buffer holding `index` in its last 4 bytes.
pub fn sub_account_buffer(index: u32, len: usize) -> TypeResult<Vec<u8>> {
    write_u32_be_tail(index, len)
}

impl fmt::Debug for SubAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubAccount({})", self.to_hex())
    }
}

impl fmt::Display for SubAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; SUBACCOUNT_LEN]> for SubAccount {
    fn from(bytes: [u8; SUBACCOUNT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<SubAccount> for [u8; SUBACCOUNT_LEN] {
    fn from(sub: SubAccount) -> Self {
        sub.0
    }
}

impl AsRef<[u8]> for SubAccount {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
