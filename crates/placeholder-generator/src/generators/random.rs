//! Random number and string generators.

use rand::Rng;

/// Uppercase ASCII letters.
pub const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase ASCII letters followed by decimal digits.
pub const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random integer in `min..=max`.
///
/// If `min > max` the bounds are swapped.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Generate `len` characters drawn uniformly (with replacement) from `charset`.
///
/// `charset` must be ASCII. An empty charset yields an empty string.
pub fn generate_from_charset<R: Rng>(rng: &mut R, charset: &[u8], len: usize) -> String {
    if charset.is_empty() {
        return String::new();
    }

    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}
