//! Admin login check.

/// Configured administrator credentials.
///
/// Verification is plain string equality. No hashing and no session
/// token exist in this design; the caller keeps its own logged-in
/// flag.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a login attempt against the configured credentials.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify() {
        let creds = AdminCredentials::new("admin", "s3cret");

        assert!(creds.verify("admin", "s3cret"));
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("other", "s3cret"));
        assert!(!creds.verify("", ""));
    }
}
