//! Password hashing and verification
//!
//! Thin wrappers over bcrypt. Hashes carry their own salt and the compare is
//! constant-time inside the library.

use bcrypt::BcryptError;

/// Hash a plaintext password with the given bcrypt cost factor
pub fn hash_password(plain: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plain, cost)
}

/// Verify a plaintext password against a stored bcrypt hash
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hash)
}
