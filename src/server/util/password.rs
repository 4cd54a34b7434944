//! Salted password hashing for stored credentials.
//!
//! Hashes are stored as `salt$digest` where the digest is the hex-encoded
//! blake3 hash of the salt concatenated with the password. Verification
//! re-derives the digest and compares against the stored one; `blake3::Hash`
//! comparison is constant-time.

use rand::Rng;

const SALT_LENGTH: usize = 16;

/// Hashes a password with a freshly generated random salt.
///
/// # Arguments
/// - `password` - Plain text password to hash
///
/// # Returns
/// - `String` - Stored credential in `salt$digest` form
pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    let digest = blake3::hash(format!("{salt}{password}").as_bytes());

    format!("{}${}", salt, digest.to_hex())
}

/// Verifies a password attempt against a stored `salt$digest` credential.
///
/// Malformed stored values fail verification rather than erroring; a row
/// written by anything other than `hash_password` can never authenticate.
///
/// # Arguments
/// - `password` - Plain text password attempt
/// - `stored` - Stored credential in `salt$digest` form
///
/// # Returns
/// - `bool` - Whether the attempt matches the stored credential
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest_hex)) = stored.split_once('$') else {
        return false;
    };

    let Ok(expected) = blake3::Hash::from_hex(digest_hex) else {
        return false;
    };

    blake3::hash(format!("{salt}{password}").as_bytes()) == expected
}

fn generate_salt() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..SALT_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
