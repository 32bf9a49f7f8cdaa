//! Environment variable credential resolution.
//!
//! The API credential is read from the environment once at startup, before
//! any provider is constructed. Absence blocks every model call with a
//! message that names the variable; the value itself only ever travels
//! inside a [`SecretString`].

use secrecy::SecretString;

use contentry_types::error::CredentialError;

/// Environment variable holding the Groq API key.
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

/// Read-only credential store backed by environment variables.
pub struct EnvCredentialStore;

impl EnvCredentialStore {
    pub fn new() -> Self {
        Self
    }

    /// Look up a credential, returning `None` when unset.
    ///
    /// A variable that exists but holds invalid Unicode is treated as
    /// unset: credentials must be valid strings.
    pub fn get(&self, key: &str) -> Option<SecretString> {
        match std::env::var(key) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            _ => None,
        }
    }

    /// Look up a credential, failing with a user-visible message when unset.
    pub fn require(&self, key: &str) -> Result<SecretString, CredentialError> {
        self.get(key)
            .ok_or_else(|| CredentialError::Missing(key.to_string()))
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_get_existing() {
        // SAFETY: this test sets a uniquely-named var and removes it after.
        unsafe { std::env::set_var("CONTENTRY_TEST_CRED_1", "gsk-test-value") };

        let store = EnvCredentialStore::new();
        let value = store.get("CONTENTRY_TEST_CRED_1").unwrap();
        assert_eq!(value.expose_secret(), "gsk-test-value");

        // SAFETY: removing the var this test just set.
        unsafe { std::env::remove_var("CONTENTRY_TEST_CRED_1") };
    }

    #[test]
    fn test_get_missing() {
        let store = EnvCredentialStore::new();
        assert!(store.get("CONTENTRY_NONEXISTENT_VAR_XYZ").is_none());
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        // SAFETY: uniquely-named var, removed after.
        unsafe { std::env::set_var("CONTENTRY_TEST_CRED_2", "   ") };

        let store = EnvCredentialStore::new();
        assert!(store.get("CONTENTRY_TEST_CRED_2").is_none());

        // SAFETY: removing the var this test just set.
        unsafe { std::env::remove_var("CONTENTRY_TEST_CRED_2") };
    }

    #[test]
    fn test_require_missing_names_the_variable() {
        let store = EnvCredentialStore::new();
        let err = store.require("CONTENTRY_NONEXISTENT_VAR_XYZ").unwrap_err();
        assert!(err.to_string().contains("CONTENTRY_NONEXISTENT_VAR_XYZ"));
    }
}
