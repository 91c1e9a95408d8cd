//! Passphrase-to-seed derivation.
//!
//! The seed is the first four bytes of the MD5 digest of the passphrase's
//! UTF-8 bytes, read as a little-endian `u32`. Byte order is pinned so the
//! same passphrase yields the same seed on every host.
//!
//! MD5 is used only to spread the passphrase over 32 bits. It provides no
//! security: anyone who knows the passphrase can rebuild the grid.

use md5::{Digest, Md5};

/// Number of digest bytes folded into the seed.
const SEED_BYTES: usize = 4;

/// Derives the 32-bit generator seed for a passphrase.
///
/// The empty passphrase is valid and hashes the empty byte sequence.
///
/// # Examples
///
/// ```
/// use kleira::derive_seed;
///
/// // MD5("") = d41d8cd9...; the first four bytes read little-endian.
/// assert_eq!(derive_seed(""), 0xd98c_1dd4);
/// ```
pub fn derive_seed(passphrase: &str) -> u32 {
    let digest = Md5::digest(passphrase.as_bytes());
    let mut prefix = [0u8; SEED_BYTES];
    prefix.copy_from_slice(&digest[..SEED_BYTES]);
    u32::from_le_bytes(prefix)
}
