use crate::keychain::{CredentialStore, KeychainError};

pub const API_URL_SECRET: &str = "WS1_API_URL";
pub const API_USERNAME_SECRET: &str = "WS1_API_USERNAME";
pub const API_PASSWORD_SECRET: &str = "WS1_API_PASSWORD";
pub const API_TOKEN_SECRET: &str = "WS1_API_TOKEN";

#[derive(Clone, Debug)]
pub struct UemConfig {
    pub api_url: String,
    pub username: String,
    pub password: String,
    pub tenant_code: String,
}

impl UemConfig {
    /// Resolves the four UEM credentials from the store. Each secret is
    /// fetched independently; the first failure aborts.
    pub fn from_store(store: &dyn CredentialStore) -> Result<Self, KeychainError> {
        let api_url = store.lookup(API_URL_SECRET)?.trim_end_matches('/').to_string();
        let username = store.lookup(API_USERNAME_SECRET)?;
        let password = store.lookup(API_PASSWORD_SECRET)?;
        let tenant_code = store.lookup(API_TOKEN_SECRET)?;

        Ok(Self {
            api_url,
            username,
            password,
            tenant_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UemConfig;
    use crate::keychain::testing::MemoryStore;

    #[test]
    fn resolves_all_four_secrets() {
        let store = MemoryStore::new(&[
            ("WS1_API_URL", "https://cn1234.awmdm.example.com/"),
            ("WS1_API_USERNAME", "api-user"),
            ("WS1_API_PASSWORD", "api-pass"),
            ("WS1_API_TOKEN", "tenant-code"),
        ]);

        let config = UemConfig::from_store(&store).unwrap();
        assert_eq!(config.api_url, "https://cn1234.awmdm.example.com");
        assert_eq!(config.username, "api-user");
        assert_eq!(config.password, "api-pass");
        assert_eq!(config.tenant_code, "tenant-code");
    }

    #[test]
    fn missing_secret_fails_resolution() {
        let store = MemoryStore::new(&[
            ("WS1_API_URL", "https://cn1234.awmdm.example.com"),
            ("WS1_API_USERNAME", "api-user"),
        ]);
        assert!(UemConfig::from_store(&store).is_err());
    }
}
