use rand::distributions::Alphanumeric;
use rand::Rng;

/// Gateway replay protection depends on (timestamp, nonce) uniqueness, so
/// nonces carry 32 characters drawn from the alphanumeric alphabet.
pub const NONCE_LEN: usize = 32;

/// Draw a fresh request nonce from the supplied randomness source.
///
/// Taking the source as a parameter keeps signing flows testable: tests pass
/// a seeded RNG and pin exact signature strings.
pub fn random_nonce<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
