pub mod cs;
pub mod error;

pub use cs::security::{hmac_md5, hmac_md5_bytes, md5_digest};
pub use error::{Error, Result};
