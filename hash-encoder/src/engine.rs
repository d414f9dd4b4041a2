//! Algorithm dispatch and hex rendering.
//!
//! MD5 and HMAC-MD5 are computed by `devtools-md5`; everything else is
//! delegated to the RustCrypto `sha1`, `sha2` and `hmac` crates.

use hmac::{digest::KeyInit, Hmac, Mac};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::{Algorithm, Error, Result};

/// MD5 of `message` as 32 lowercase hex characters.
pub fn md5_hex(message: impl AsRef<[u8]>) -> String {
    hex::encode(devtools_md5::compute(message))
}

/// HMAC-MD5 of `message` under `key` as 32 lowercase hex characters.
pub fn hmac_md5_hex(message: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> String {
    hex::encode(devtools_md5::hmac(key, message))
}

/// Hashes `message` with `algorithm` and returns the lowercase hex digest.
///
/// HMAC algorithms take `key` as raw bytes and fail with
/// [`Error::MissingKey`] when it is absent. Plain hashes ignore `key`.
pub fn hash(algorithm: Algorithm, message: &[u8], key: Option<&[u8]>) -> Result<String> {
    log::debug!("hashing {} bytes with {}", message.len(), algorithm);

    let key = || key.ok_or(Error::MissingKey(algorithm));
    let hex = match algorithm {
        Algorithm::Md5 => md5_hex(message),
        Algorithm::Sha1 => digest_hex::<Sha1>(message),
        Algorithm::Sha256 => digest_hex::<Sha256>(message),
        Algorithm::Sha384 => digest_hex::<Sha384>(message),
        Algorithm::Sha512 => digest_hex::<Sha512>(message),
        Algorithm::HmacMd5 => hmac_md5_hex(message, key()?),
        Algorithm::HmacSha1 => hmac_hex::<Hmac<Sha1>>(key()?, message)?,
        Algorithm::HmacSha256 => hmac_hex::<Hmac<Sha256>>(key()?, message)?,
        Algorithm::HmacSha384 => hmac_hex::<Hmac<Sha384>>(key()?, message)?,
        Algorithm::HmacSha512 => hmac_hex::<Hmac<Sha512>>(key()?, message)?,
    };
    Ok(hex)
}

fn digest_hex<D: Digest>(message: &[u8]) -> String {
    hex::encode(D::digest(message))
}

fn hmac_hex<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<String> {
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
    Mac::update(&mut mac, message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
