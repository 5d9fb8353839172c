use std::process::Command;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum KeychainError {
    #[error("Failed to run the security command: {0}")]
    Io(#[from] std::io::Error),

    #[error("Keychain lookup for [{name}] failed: {detail}")]
    LookupFailed { name: String, detail: String },

    #[error("Keychain value for [{0}] is not valid UTF-8")]
    NotUtf8(String),
}

/// Source of named credentials. The production implementation shells out to
/// the macOS `security` tool; tests substitute an in-memory map.
pub trait CredentialStore {
    fn lookup(&self, name: &str) -> Result<String, KeychainError>;
}

/// Fetches secrets from a dedicated macOS keychain via
/// `/usr/bin/security find-generic-password`.
#[derive(Clone, Debug)]
pub struct SecurityCli {
    keychain: String,
}

impl SecurityCli {
    pub fn new(keychain: impl Into<String>) -> Self {
        Self {
            keychain: keychain.into(),
        }
    }
}

impl CredentialStore for SecurityCli {
    fn lookup(&self, name: &str) -> Result<String, KeychainError> {
        debug!(
            "Running /usr/bin/security find-generic-password -a {} -w {}",
            name, self.keychain
        );

        let output = Command::new("/usr/bin/security")
            .args(["find-generic-password", "-a", name, "-w", &self.keychain])
            .output()?;

        if !output.status.success() {
            let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("Keychain lookup for [{}] failed: {}", name, detail);
            return Err(KeychainError::LookupFailed {
                name: name.to_string(),
                detail,
            });
        }

        let value =
            String::from_utf8(output.stdout).map_err(|_| KeychainError::NotUtf8(name.to_string()))?;
        Ok(value.trim().to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{CredentialStore, KeychainError};
    use std::collections::HashMap;

    /// In-memory stand-in for the macOS keychain.
    pub struct MemoryStore {
        secrets: HashMap<String, String>,
    }

    impl MemoryStore {
        pub fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                secrets: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl CredentialStore for MemoryStore {
        fn lookup(&self, name: &str) -> Result<String, KeychainError> {
            self.secrets
                .get(name)
                .map(|v| v.trim().to_string())
                .ok_or_else(|| KeychainError::LookupFailed {
                    name: name.to_string(),
                    detail: "The specified item could not be found in the keychain.".to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::{CredentialStore, KeychainError};

    #[test]
    fn lookup_returns_trimmed_value() {
        let store = MemoryStore::new(&[("WS1_API_TOKEN", "  abc123\n")]);
        assert_eq!(store.lookup("WS1_API_TOKEN").unwrap(), "abc123");
    }

    #[test]
    fn missing_secret_is_a_lookup_failure() {
        let store = MemoryStore::new(&[]);
        let err = store.lookup("WS1_API_URL").unwrap_err();
        match err {
            KeychainError::LookupFailed { name, .. } => assert_eq!(name, "WS1_API_URL"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
