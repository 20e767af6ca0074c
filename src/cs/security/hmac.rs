//! HMAC-MD5 (RFC 2104) for interop with legacy protocols.
//!
//! HMAC(K, m) = MD5((K' ^ opad) || MD5((K' ^ ipad) || m)), where K' is the key
//! normalized to exactly one MD5 block.
//!
//! MAC comparison is left to the caller. Nothing here runs in constant time.

use super::md5::{md5_digest, MD5_BLOCK_SIZE, MD5_OUTPUT_SIZE};
use crate::error::{Error, Result};

/// Key and pad length for HMAC-MD5: one MD5 compression block.
pub const HMAC_BLOCK_SIZE: usize = MD5_BLOCK_SIZE;

/// Byte XORed into the key for the inner hash.
pub const IPAD: u8 = 0x36;

/// Byte XORed into the key for the outer hash.
pub const OPAD: u8 = 0x5C;

/// Brings `key` to exactly [`HMAC_BLOCK_SIZE`] bytes.
///
/// Keys longer than a block are replaced by their MD5 digest first. Whatever
/// remains is right-padded with zeros. A key of exactly one block is used as-is.
pub fn normalize_key(key: &[u8]) -> [u8; HMAC_BLOCK_SIZE] {
    let mut block = [0u8; HMAC_BLOCK_SIZE];
    if key.len() > HMAC_BLOCK_SIZE {
        log::trace!("hmac: {}-byte key exceeds block, hashing", key.len());
        block[..MD5_OUTPUT_SIZE].copy_from_slice(&md5_digest(key));
    } else {
        log::trace!("hmac: {}-byte key, zero-padding to block", key.len());
        block[..key.len()].copy_from_slice(key);
    }
    block
}

/// Derives the inner and outer pads from a normalized key.
pub fn derive_pads(
    key: &[u8; HMAC_BLOCK_SIZE],
) -> ([u8; HMAC_BLOCK_SIZE], [u8; HMAC_BLOCK_SIZE]) {
    let mut ipad = [0u8; HMAC_BLOCK_SIZE];
    let mut opad = [0u8; HMAC_BLOCK_SIZE];
    for ((i, o), &k) in ipad.iter_mut().zip(opad.iter_mut()).zip(key.iter()) {
        *i = k ^ IPAD;
        *o = k ^ OPAD;
    }
    (ipad, opad)
}

/// Computes the raw 16-byte HMAC-MD5 of `message` under `key`.
///
/// Any key length (including zero) and any message length are accepted.
pub fn hmac_md5_bytes(key: &[u8], message: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let key = normalize_key(key);
    let (ipad, opad) = derive_pads(&key);

    let mut inner = Vec::with_capacity(HMAC_BLOCK_SIZE + message.len());
    inner.extend_from_slice(&ipad);
    inner.extend_from_slice(message);
    let inner_hash = md5_digest(&inner);

    let mut outer = [0u8; HMAC_BLOCK_SIZE + MD5_OUTPUT_SIZE];
    outer[..HMAC_BLOCK_SIZE].copy_from_slice(&opad);
    outer[HMAC_BLOCK_SIZE..].copy_from_slice(&inner_hash);
    md5_digest(&outer)
}

/// Computes HMAC-MD5 of `message` under `key` as 32 lowercase hex digits.
pub fn hmac_md5(key: &[u8], message: &[u8]) -> String {
    hex::encode(hmac_md5_bytes(key, message))
}

/// Parses a hex-encoded MAC, as produced by [`hmac_md5`] or a remote peer.
///
/// Upper- and lower-case digits are both accepted.
pub fn decode_mac(mac: &str) -> Result<[u8; MD5_OUTPUT_SIZE]> {
    let bytes = hex::decode(mac.trim())?;
    if bytes.len() != MD5_OUTPUT_SIZE {
        return Err(Error::InvalidLength {
            expected: MD5_OUTPUT_SIZE,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; MD5_OUTPUT_SIZE];
    out.copy_from_slice(&bytes);
    Ok(out)
}
