//! Charge payload encryption.
//!
//! The gateway only accepts charge payloads encrypted with triple-DES in ECB
//! mode, PKCS5-padded and base64-encoded, under a key derived from the
//! merchant secret key.

use base64::prelude::*;
use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockEncrypt, KeyInit};
use des::TdesEde3;

use crate::core::{RaveError, Result};

/// Prefix carried by every gateway secret key
pub const SECRET_KEY_PREFIX: &str = "FLWSECK-";

/// Triple-DES block size in bytes
pub const BLOCK_SIZE: usize = 8;

/// Length of a derived encryption key
pub const KEY_LENGTH: usize = 24;

/// Derive the 24-byte encryption key from a secret key.
///
/// The key is the first 12 bytes of the secret key (with the first
/// `FLWSECK-` removed) followed by the hex of the last 6 bytes of the
/// MD5 digest of the full secret key.
pub fn derive_encryption_key(secret_key: &str) -> Result<String> {
    let adjusted = secret_key.replacen(SECRET_KEY_PREFIX, "", 1);
    let head = adjusted.as_bytes().get(..12).ok_or_else(|| {
        RaveError::Encryption("secret key is too short to derive an encryption key".to_string())
    })?;
    let head = std::str::from_utf8(head)
        .map_err(|_| RaveError::Encryption("secret key must be ASCII".to_string()))?;

    let digest = md5::compute(secret_key.as_bytes());
    let tail = hex::encode(&digest.0[10..]);

    Ok(format!("{}{}", head, tail))
}

/// Append PKCS5 padding; a full block is added when `data` is already aligned.
pub fn pkcs5_padding(mut data: Vec<u8>, block_size: usize) -> Vec<u8> {
    let padding = block_size - data.len() % block_size;
    data.extend(std::iter::repeat(padding as u8).take(padding));
    data
}

/// Encrypt `payload` with 3DES-ECB under `key` and return standard base64.
pub fn encrypt_3des(key: &str, payload: &str) -> Result<String> {
    if key.len() != KEY_LENGTH {
        return Err(RaveError::Encryption(format!(
            "3DES key must be {} bytes, got {}",
            KEY_LENGTH,
            key.len()
        )));
    }

    let cipher = TdesEde3::new_from_slice(key.as_bytes())
        .map_err(|e| RaveError::Encryption(format!("invalid 3DES key: {}", e)))?;

    let mut buffer = pkcs5_padding(payload.as_bytes().to_vec(), BLOCK_SIZE);
    for block in buffer.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }

    Ok(BASE64_STANDARD.encode(buffer))
}
