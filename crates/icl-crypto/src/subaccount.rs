use icl_types::{principal_or_anonymous, Principal, SubAccount};

use crate::hasher::DomainHasher;

/// Sub-account owned on behalf of `principal`:
/// `SHA-256("\x07prin-id" || principal)`. Anonymous when absent.
pub fn sub_account_from_principal(principal: Option<&Principal>) -> SubAccount {
    let principal = principal_or_anonymous(principal);
    SubAccount::new(DomainHasher::PRINCIPAL_SUBACCOUNT.hash256(&[principal.as_slice()]))
}

/// Sub-account named by free text: `SHA-256("\x06str-id" || utf8(text))`.
/// An absent text hashes as the empty string.
pub fn sub_account_from_text(text: Option<&str>) -> SubAccount {
    let text = text.unwrap_or_default();
    SubAccount::new(DomainHasher::TEXT_SUBACCOUNT.hash256(&[text.as_bytes()]))
}
