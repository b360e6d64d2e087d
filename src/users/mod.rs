use std::collections::HashMap;

use bcrypt::{DEFAULT_COST, hash, verify};

/// Read-only credential table. Secrets are bcrypt-hashed when the repository
/// is built, so verification is always a hash comparison.
pub struct UserRepository {
    records: HashMap<String, String>,
}

impl UserRepository {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, bcrypt::BcryptError> {
        let mut records = HashMap::new();
        for (username, password) in pairs {
            records.insert((*username).to_string(), hash(password.as_bytes(), DEFAULT_COST)?);
        }
        Ok(UserRepository { records })
    }

    /// The two demo accounts. Stand-in for a real user database.
    pub fn with_demo_users() -> Result<Self, bcrypt::BcryptError> {
        Self::from_pairs(&[("admin", "1234"), ("user", "9876")])
    }

    /// Exact, case-sensitive match on the identifier; hash comparison on the
    /// secret. Unknown identifiers report a plain mismatch.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, bcrypt::BcryptError> {
        match self.records.get(username) {
            Some(hashed) => verify(password.as_bytes(), hashed),
            None => Ok(false),
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.records.contains_key(username)
    }
}
