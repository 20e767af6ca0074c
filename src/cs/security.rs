pub mod hmac;
pub mod md5;

// Re-export MD5 functionality
pub use md5::{md5_digest, md5_hex, pad_message, MD5_BLOCK_SIZE, MD5_OUTPUT_SIZE};

// Re-export HMAC-MD5 functionality
pub use hmac::{
    decode_mac, derive_pads, hmac_md5, hmac_md5_bytes, normalize_key, HMAC_BLOCK_SIZE, IPAD, OPAD,
};
