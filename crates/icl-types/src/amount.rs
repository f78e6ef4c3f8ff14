//! Fixed-point token amounts.
//!
//! Ledger amounts are integers counting e8s: 10^8 e8s make one token.
//! Rendering truncates to the requested number of decimals and trims
//! trailing zeros, keeping at least one fractional digit. Parsing rounds
//! any precision beyond 8 decimals *up*, so a typed amount is never
//! under-counted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Number of decimal places of one token.
pub const DECIMALS: u8 = 8;
/// e8s per whole token.
pub const E8S_PER_TOKEN: u64 = 100_000_000;

/// Render `amount` e8s as `<integer>.<fraction>`.
///
/// `decimals` defaults to 8 and must not exceed it. With `Some(0)` only the
/// integer part is returned.
pub fn e8s_to_decimal(amount: u64, decimals: Option<u8>) -> TypeResult<String> {
    let decimals = decimals.unwrap_or(DECIMALS);
    if decimals > DECIMALS {
        return Err(TypeError::InvalidArgument(format!(
            "decimals must be at most {DECIMALS}, got {decimals}"
        )));
    }
    Ok(format_e8s(amount, decimals))
}

fn format_e8s(amount: u64, decimals: u8) -> String {
    let whole = amount / E8S_PER_TOKEN;
    if decimals == 0 {
        return whole.to_string();
    }
    let digits = format!("{:08}", amount % E8S_PER_TOKEN);
    let kept = &digits[..decimals as usize];
    let trimmed = kept.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { &kept[..1] } else { trimmed };
    format!("{whole}.{fraction}")
}

/// Parse `<integer>[.<fraction>]` into e8s.
///
/// The integer part may be empty (`.5`). Fraction digits past the eighth
/// round the result up by one e8 if any of them is non-zero.
pub fn decimal_to_e8s(text: &str) -> TypeResult<u64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TypeError::InvalidEncoding("empty amount".into()));
    }
    if text.starts_with('-') {
        return Err(TypeError::InvalidArgument(format!(
            "negative amount: {text}"
        )));
    }

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };

    let whole = if int_part.is_empty() {
        0
    } else {
        ensure_digits(int_part)?;
        int_part.parse::<u64>().map_err(|_| out_of_range(text))?
    };
    let fraction = match frac_part {
        Some(frac) => ceil_fraction(frac)?,
        None => 0,
    };

    whole
        .checked_mul(E8S_PER_TOKEN)
        .and_then(|v| v.checked_add(fraction))
        .ok_or_else(|| out_of_range(text))
}

/// `ceil(0.<digits> * 10^8)`, computed on the digits directly.
fn ceil_fraction(digits: &str) -> TypeResult<u64> {
    ensure_digits(digits)?;
    let split = digits.len().min(DECIMALS as usize);
    let (head, rest) = digits.split_at(split);

    let mut value = head
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
    value *= 10u64.pow((DECIMALS as usize - split) as u32);

    if rest.bytes().any(|b| b != b'0') {
        value += 1;
    }
    Ok(value)
}

fn ensure_digits(s: &str) -> TypeResult<()> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(TypeError::InvalidEncoding(format!(
            "not a decimal number: {s:?}"
        )))
    }
}

fn out_of_range(text: &str) -> TypeError {
    TypeError::InvalidArgument(format!("amount out of range: {text}"))
}

/// A token amount in e8s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tokens(u64);

impl Tokens {
    pub const ZERO: Self = Self(0);

    pub const fn from_e8s(e8s: u64) -> Self {
        Self(e8s)
    }

    pub const fn e8s(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_e8s(self.0, DECIMALS))
    }
}

impl FromStr for Tokens {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decimal_to_e8s(s).map(Self)
    }
}

impl From<u64> for Tokens {
    fn from(e8s: u64) -> Self {
        Self(e8s)
    }
}
