use sha2::{Digest, Sha224, Sha256};

/// Length of a SHA-224 digest.
pub const SHA224_LEN: usize = 28;
/// Length of a SHA-256 digest.
pub const SHA256_LEN: usize = 32;

/// Domain-separated SHA-2 hasher.
///
/// Each hasher carries a tag that is fed before any input. Tags are
/// length-prefixed (`0x0A` + `account-id`, `0x07` + `prin-id`, ...), so the
/// same payload hashed for two purposes never yields the same digest.
pub struct DomainHasher {
    tag: &'static [u8],
}

impl DomainHasher {
    /// Account identifier derivation (SHA-224).
    pub const ACCOUNT_ID: Self = Self {
        tag: b"\x0Aaccount-id",
    };
    /// Sub-account derived from a principal (SHA-256).
    pub const PRINCIPAL_SUBACCOUNT: Self = Self { tag: b"\x07prin-id" };
    /// Sub-account derived from free text (SHA-256).
    pub const TEXT_SUBACCOUNT: Self = Self { tag: b"\x06str-id" };

    /// Create a hasher with a custom tag.
    pub const fn new(tag: &'static [u8]) -> Self {
        Self { tag }
    }

    /// A fresh SHA-224 state with the tag already absorbed.
    ///
    /// Chunks passed to `update` are concatenated in call order.
    pub fn sha224(&self) -> Sha224 {
        let mut state = Sha224::new();
        state.update(self.tag);
        state
    }

    /// A fresh SHA-256 state with the tag already absorbed.
    pub fn sha256(&self) -> Sha256 {
        let mut state = Sha256::new();
        state.update(self.tag);
        state
    }

    /// One-shot SHA-224 over `tag || chunks[0] || chunks[1] || ...`.
    pub fn hash224(&self, chunks: &[&[u8]]) -> [u8; SHA224_LEN] {
        let mut state = self.sha224();
        for chunk in chunks {
            state.update(chunk);
        }
        state.finalize().into()
    }

    /// One-shot SHA-256 over `tag || chunks[0] || chunks[1] || ...`.
    pub fn hash256(&self, chunks: &[&[u8]]) -> [u8; SHA256_LEN] {
        let mut state = self.sha256();
        for chunk in chunks {
            state.update(chunk);
        }
        state.finalize().into()
    }

    /// The tag fed ahead of every input.
    pub fn tag(&self) -> &[u8] {
        self.tag
    }

    /// Plain SHA-224 without a tag.
    pub fn raw_sha224(data: &[u8]) -> [u8; SHA224_LEN] {
        Sha224::digest(data).into()
    }

    /// Plain SHA-256 without a tag.
    pub fn raw_sha256(data: &[u8]) -> [u8; SHA256_LEN] {
        Sha256::digest(data).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha224_vectors() {
        assert_eq!(
            hex::encode(DomainHasher::raw_sha224(b"")),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
        assert_eq!(
            hex::encode(DomainHasher::raw_sha224(b"abc")),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn sha256_vector() {
        assert_eq!(
            hex::encode(DomainHasher::raw_sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn tags_have_length_prefix() {
        assert_eq!(DomainHasher::ACCOUNT_ID.tag().len(), 11);
        assert_eq!(DomainHasher::ACCOUNT_ID.tag()[0], 10);
        assert_eq!(DomainHasher::PRINCIPAL_SUBACCOUNT.tag().len(), 8);
        assert_eq!(DomainHasher::PRINCIPAL_SUBACCOUNT.tag()[0], 7);
        assert_eq!(DomainHasher::TEXT_SUBACCOUNT.tag().len(), 7);
        assert_eq!(DomainHasher::TEXT_SUBACCOUNT.tag()[0], 6);
    }

    #[test]
    fn chunks_concatenate_in_order() {
        let hasher = DomainHasher::new(b"t");
        let split = hasher.hash256(&[b"ab", b"cd"]);
        let joined = hasher.hash256(&[b"abcd"]);
        let swapped = hasher.hash256(&[b"cd", b"ab"]);
        assert_eq!(split, joined);
        assert_ne!(split, swapped);
    }

    #[test]
    fn tag_is_prepended() {
        let tagged = DomainHasher::new(b"abc").hash224(&[]);
        assert_eq!(tagged, DomainHasher::raw_sha224(b"abc"));
    }

    #[test]
    fn different_tags_produce_different_hashes() {
        let data: &[u8] = b"same content";
        let prin = DomainHasher::PRINCIPAL_SUBACCOUNT.hash256(&[data]);
        let text = DomainHasher::TEXT_SUBACCOUNT.hash256(&[data]);
        assert_ne!(prin, text);
        assert_ne!(prin, DomainHasher::raw_sha256(data));
    }

    #[test]
    fn incremental_state_matches_one_shot() {
        let mut state = DomainHasher::ACCOUNT_ID.sha224();
        state.update([4u8]);
        state.update([0u8; 32]);
        let digest: [u8; SHA224_LEN] = state.finalize().into();
        assert_eq!(digest, DomainHasher::ACCOUNT_ID.hash224(&[&[4u8], &[0u8; 32]]));
    }
}
