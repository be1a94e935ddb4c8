//! Identifier Module
//!
//! Mints random alphanumeric identifiers, e.g. for use as cache keys.
//! Independent of the cache itself.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Result;

// == Constants ==
/// Length of identifiers produced by [`generate_id`]
pub const ID_LENGTH: usize = 8;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Bytes at or above this value are rejected so every symbol is equally likely
const ACCEPT_BELOW: usize = 256 - (256 % CHARSET.len());

// == Generate ==
/// Returns a fresh [`ID_LENGTH`]-character identifier drawn from `[a-zA-Z0-9]`.
///
/// # Errors
/// Returns [`CacheError::RandomSource`](crate::CacheError::RandomSource) if the
/// operating system's secure random source fails. No weaker fallback is used.
pub fn generate_id() -> Result<String> {
    generate_id_with_len(ID_LENGTH)
}

/// Returns a random identifier of `len` characters drawn from `[a-zA-Z0-9]`.
pub fn generate_id_with_len(len: usize) -> Result<String> {
    let mut id = String::with_capacity(len);
    let mut buf = [0u8; 32];

    while id.len() < len {
        OsRng.try_fill_bytes(&mut buf)?;

        for byte in buf.iter().map(|b| *b as usize) {
            if id.len() == len {
                break;
            }
            if byte < ACCEPT_BELOW {
                id.push(CHARSET[byte % CHARSET.len()] as char);
            }
        }
    }

    Ok(id)
}
