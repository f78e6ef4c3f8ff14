//! Helpers around the external [`Principal`] type.
//!
//! Principals are minted by the identity layer; this crate only reads their
//! raw bytes and canonical text, never re-derives them.

pub use candid::Principal;

use crate::error::{TypeError, TypeResult};

/// The principal to use when none is supplied.
pub fn principal_or_anonymous(principal: Option<&Principal>) -> Principal {
    principal.copied().unwrap_or_else(Principal::anonymous)
}

/// Parse the canonical text form (e.g. `2vxsx-fae`).
pub fn parse_principal(text: &str) -> TypeResult<Principal> {
    Principal::from_text(text).map_err(|e| TypeError::InvalidPrincipal(e.to_string()))
}

/// Abbreviated text form for display: `abcde...xyz`.
///
/// Short principals (anonymous, management canister) are shown in full.
/// The tail is taken from character offset 60, which is the end of a
/// 63-character self-authenticating principal.
pub fn short_principal(principal: Option<&Principal>) -> String {
    let Some(principal) = principal else {
        return String::new();
    };
    let text = principal.to_text();
    if text.len() <= 9 {
        return text;
    }
    let head = text.get(..5).unwrap_or_default();
    let tail = text.get(60..text.len().min(63)).unwrap_or_default();
    format!("{head}...{tail}")
}
