//! Short link identifier generation.
//!
//! Identifiers are drawn uniformly from a 62-character alphanumeric alphabet.
//! No uniqueness check is made against stored links: with the default length
//! of 8 the keyspace is 62^8 (about 2.2 * 10^14).

use rand::Rng;

/// Characters an identifier may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Generates an identifier of `length` characters from the thread-local CSPRNG.
///
/// # Panics
///
/// Panics if the operating system entropy source cannot seed the generator.
pub fn generate_id(length: usize) -> String {
    generate_id_with(&mut rand::rng(), length)
}

/// Generates an identifier of `length` characters using the given random source.
///
/// Each character is sampled independently and uniformly from [`ALPHABET`].
pub fn generate_id_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `id` could have been produced by this generator.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| ALPHABET.contains(&b))
}
