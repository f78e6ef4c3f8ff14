use icl_types::{principal_or_anonymous, AccountIdentifier, Principal, SubAccount};

use crate::hasher::DomainHasher;

/// Derive the ledger account identifier of `principal` + `sub_account`.
///
/// `crc32(h) || h` where `h = SHA-224("\x0Aaccount-id" || principal || sub_account)`.
/// A missing principal is the anonymous principal; a missing sub-account
/// is all zeros.
pub fn derive_account_identifier(
    principal: Option<&Principal>,
    sub_account: Option<&SubAccount>,
) -> AccountIdentifier {
    let principal = principal_or_anonymous(principal);
    let sub_account = sub_account.copied().unwrap_or_default();
    let hash = DomainHasher::ACCOUNT_ID.hash224(&[principal.as_slice(), sub_account.as_bytes()]);
    AccountIdentifier::from_hash(hash)
}

/// Account identifier of the principal's main (all-zero) sub-account.
pub fn derive_default_account_identifier(principal: Option<&Principal>) -> AccountIdentifier {
    derive_account_identifier(principal, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icl_types::{crc32, parse_principal};
    use proptest::prelude::*;

    #[test]
    fn anonymous_golden_vector() {
        let id = derive_account_identifier(None, None);
        assert_eq!(
            id.to_hex(),
            "1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79"
        );
    }

    #[test]
    fn anonymous_from_text_matches_default() {
        let anon = parse_principal("2vxsx-fae").unwrap();
        assert_eq!(
            derive_account_identifier(Some(&anon), None),
            derive_account_identifier(None, None)
        );
        assert_eq!(
            derive_account_identifier(Some(&anon), Some(&SubAccount::default())),
            derive_default_account_identifier(None)
        );
    }

    #[test]
    fn ledger_canister_golden_vector() {
        let ledger = parse_principal("ryjl3-tyaaa-aaaaa-aaaba-cai").unwrap();
        assert_eq!(
            derive_default_account_identifier(Some(&ledger)).to_hex(),
            "883eef7c44be51afe4a4420d4df4beff708f3cf2f5de5efcc9f58680bb0f3690"
        );
    }

    #[test]
    fn indexed_sub_account_golden_vector() {
        let id = derive_account_identifier(None, Some(&SubAccount::from_index(1)));
        assert_eq!(
            id.to_hex(),
            "b8fab0be4ad596a3739ab93e7316a8647ee72e167709441da49ce9171828629d"
        );
    }

    #[test]
    fn derived_identifier_verifies() {
        let id = derive_default_account_identifier(None);
        assert!(id.verify().is_ok());
        assert_eq!(AccountIdentifier::from_hex(&id.to_hex()).unwrap(), id);
    }

    proptest! {
        #[test]
        fn checksum_prefix_invariant(
            principal in proptest::collection::vec(any::<u8>(), 0..29),
            sub in any::<[u8; 32]>(),
        ) {
            let p = Principal::from_slice(&principal);
            let id = derive_account_identifier(Some(&p), Some(&SubAccount::new(sub)));
            let bytes = id.as_bytes();
            prop_assert_eq!(&bytes[..4], &crc32(&bytes[4..])[..]);
        }

        #[test]
        fn distinct_sub_accounts_distinct_ids(
            principal in proptest::collection::vec(any::<u8>(), 0..29),
            a in any::<[u8; 32]>(),
            b in any::<[u8; 32]>(),
        ) {
            prop_assume!(a != b);
            let p = Principal::from_slice(&principal);
            prop_assert_ne!(
                derive_account_identifier(Some(&p), Some(&SubAccount::new(a))),
                derive_account_identifier(Some(&p), Some(&SubAccount::new(b)))
            );
        }

        #[test]
        fn derivation_is_deterministic(index in any::<u32>()) {
            let sub = SubAccount::from_index(index);
            prop_assert_eq!(
                derive_account_identifier(None, Some(&sub)),
                derive_account_identifier(None, Some(&sub))
            );
        }
    }
}
