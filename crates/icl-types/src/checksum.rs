/// Width of an encoded checksum.
pub const CHECKSUM_LEN: usize = 4;

/// CRC-32 (ISO-HDLC, reflected polynomial `0xEDB88320`) of `bytes`.
pub fn crc32_value(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// CRC-32 of `bytes` encoded big-endian.
pub fn crc32(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    crc32_value(bytes).to_be_bytes()
}
