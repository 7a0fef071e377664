use super::Result;
use std::env;

#[cfg(not(test))]
use keyring::Entry;

/// Stored appId for one profile.
///
/// The environment variable takes priority over the keyring so CI and
/// one-off invocations never have to touch the OS secret store.
#[derive(Debug, Clone)]
pub struct Credentials {
    app_id: Option<String>,
    pub profile_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    Environment,
    Keyring,
}

impl Credentials {
    pub fn new(profile_name: String) -> Self {
        Self {
            app_id: None,
            profile_name,
        }
    }

    pub fn load(profile_name: &str) -> Result<Self> {
        let mut credentials = Self::new(profile_name.to_string());
        credentials.app_id = credentials.load_app_id()?;
        Ok(credentials)
    }

    #[cfg(not(test))]
    fn load_app_id(&self) -> Result<Option<String>> {
        let entry = Entry::new("estat-cli", &format!("app-id-{}", self.profile_name))
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;

        match entry.get_password() {
            Ok(v) => Ok(Some(v)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(crate::error::StorageError::KeyringError(e.to_string())),
        }
    }

    #[cfg(test)]
    fn load_app_id(&self) -> Result<Option<String>> {
        println!("MOCK: Loading appId for profile {}", self.profile_name);
        Ok(None)
    }

    // use auth login
    pub fn save_app_id_for_profile(profile_name: &str, app_id: &str) -> Result<()> {
        let mut credentials = Self::new(profile_name.to_string());
        credentials.app_id = Some(app_id.to_string());
        credentials.save_app_id()?;
        Ok(())
    }

    // use auth logout
    pub fn clear_app_id_for_profile(profile_name: &str) -> Result<()> {
        let credentials = Self::new(profile_name.to_string());
        credentials.delete_app_id()?;
        Ok(())
    }

    #[cfg(not(test))]
    fn save_app_id(&self) -> Result<()> {
        if let Some(v) = &self.app_id {
            let key_name = format!("app-id-{}", self.profile_name);

            let entry = Entry::new("estat-cli", &key_name)
                .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;

            entry
                .set_password(v)
                .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;
        }

        Ok(())
    }

    #[cfg(not(test))]
    fn delete_app_id(&self) -> Result<()> {
        let key_name = format!("app-id-{}", self.profile_name);

        let entry = Entry::new("estat-cli", &key_name)
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;

        match entry.delete_credential() {
            Ok(_) => Ok(()),
            Err(keyring::Error::NoEntry) => {
                // Entry doesn't exist, which is fine for logout
                Ok(())
            }
            Err(e) => Err(crate::error::StorageError::KeyringError(e.to_string())),
        }
    }

    #[cfg(test)]
    fn save_app_id(&self) -> Result<()> {
        println!("MOCK: Saving appId for profile {}", self.profile_name);
        Ok(())
    }

    #[cfg(test)]
    fn delete_app_id(&self) -> Result<()> {
        println!("MOCK: Deleting appId for profile {}", self.profile_name);
        Ok(())
    }

    #[cfg(not(test))]
    fn env_app_id() -> Option<String> {
        env::var("ESTAT_APP_ID").ok().filter(|key| !key.is_empty())
    }

    #[cfg(test)]
    fn env_app_id() -> Option<String> {
        env::var("TEST_ESTAT_APP_ID")
            .ok()
            .filter(|key| !key.is_empty())
    }

    pub fn get_auth_mode(&self) -> AuthMode {
        if Self::env_app_id().is_some() {
            AuthMode::Environment
        } else {
            AuthMode::Keyring
        }
    }

    /// The appId this profile resolves to: environment first, then the
    /// keyring-loaded value.
    pub fn resolve_app_id(&self) -> Option<String> {
        Self::env_app_id().or_else(|| self.app_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_app_id_mock() {
        let result = Credentials::save_app_id_for_profile("test-profile", "test-app-id");
        assert!(result.is_ok(), "Save should succeed in test environment");
    }

    #[test]
    fn test_load_app_id_mock() {
        let loaded = Credentials::load("test-profile");
        assert!(loaded.is_ok(), "Load should succeed in test environment");

        let creds = loaded.expect("Loaded credentials should not be None");
        assert_eq!(creds.profile_name, "test-profile");
    }

    #[test]
    fn test_clear_app_id_mock() {
        let result = Credentials::clear_app_id_for_profile("test-profile");
        assert!(result.is_ok(), "Clear should succeed in test environment");
    }

    #[test]
    fn test_get_auth_mode_with_env_app_id() {
        // Save initial state of environment variable
        let original_key = env::var("TEST_ESTAT_APP_ID").ok();

        unsafe {
            env::set_var("TEST_ESTAT_APP_ID", "test_app_id");
        }
        let creds = Credentials::new("test".to_string());
        assert!(matches!(creds.get_auth_mode(), AuthMode::Environment));
        assert_eq!(creds.resolve_app_id().as_deref(), Some("test_app_id"));

        // Restore environment variable to original state
        unsafe {
            match original_key {
                Some(value) => env::set_var("TEST_ESTAT_APP_ID", value),
                None => env::remove_var("TEST_ESTAT_APP_ID"),
            }
        }
    }

    #[test]
    fn test_get_auth_mode_without_env_app_id() {
        // Save initial state of environment variable
        let original_key = env::var("TEST_ESTAT_APP_ID").ok();

        unsafe {
            env::remove_var("TEST_ESTAT_APP_ID");
        }
        let creds = Credentials::new("test".to_string());
        assert!(matches!(creds.get_auth_mode(), AuthMode::Keyring));
        assert!(creds.resolve_app_id().is_none());

        // Restore environment variable to original state
        unsafe {
            match original_key {
                Some(value) => env::set_var("TEST_ESTAT_APP_ID", value),
                None => env::remove_var("TEST_ESTAT_APP_ID"),
            }
        }
    }
}
