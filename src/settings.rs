//! Local settings store
//!
//! Persists the access token and its expiry to a small TOML file in the
//! user's configuration directory. Reads of an absent file or absent keys
//! return the declared defaults; `clear` rewrites the defaults wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::error::AppErrors as Error;

/// Remaining lifetime (ms) a token must have to count as valid.
const TOKEN_EXPIRY_MARGIN_MS: i64 = 60_000;

const SETTINGS_DIR: &str = "openbanking-cli";
const SETTINGS_FILE: &str = "settings.toml";

/// The persisted settings record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    token_expiry: i64,
}

impl Settings {
    pub fn set_token(&mut self, token: String) {
        self.access_token = token;
    }

    /// Set the token expiry as milliseconds since the Unix epoch.
    pub fn set_expiry(&mut self, expiry: i64) {
        self.token_expiry = expiry;
    }

    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// The stored access token, wrapped so it can't leak into logs.
    #[must_use]
    pub fn access_token(&self) -> Secret<String> {
        Secret::new(self.access_token.clone())
    }

    /// The token with all but its last four characters masked.
    #[must_use]
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.access_token.chars().collect();
        if chars.is_empty() {
            "<not set>".to_string()
        } else if chars.len() <= 8 {
            "****".to_string()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("****{tail}")
        }
    }

    /// True iff a token is stored.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// True iff a token is stored and its expiry is more than 60 seconds
    /// in the future.
    #[must_use]
    pub fn has_valid_token(&self) -> bool {
        self.is_configured()
            && self.token_expiry > Utc::now().timestamp_millis() + TOKEN_EXPIRY_MARGIN_MS
    }
}

/// A handle on the backing settings file.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store rooted in the user's configuration directory.
    ///
    /// # Errors
    /// Will return an error if the configuration directory can't be determined.
    pub fn new() -> Result<Self, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::Error("could not determine the user configuration directory".to_string())
        })?;

        Ok(Self {
            path: config_dir.join(SETTINGS_DIR).join(SETTINGS_FILE),
        })
    }

    /// Store backed by an explicit file path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings, defaulting when the file doesn't exist yet.
    ///
    /// # Errors
    /// Will return an error if the file exists but can't be read or parsed.
    pub fn load(&self) -> Result<Settings, Error> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(&self.path)?;

        Ok(toml::from_str(&raw)?)
    }

    /// Write the settings, creating the parent directory on first use.
    ///
    /// # Errors
    /// Will return an error if the file can't be written.
    pub fn save(&self, settings: &Settings) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(settings)?)?;

        Ok(())
    }

    /// Reset the settings to their defaults.
    ///
    /// # Errors
    /// Will return an error if the file can't be written.
    pub fn clear(&self) -> Result<(), Error> {
        self.save(&Settings::default())
    }
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::Settings;
    use crate::tests::test::test_store;

    #[test]
    fn load_defaults_when_file_missing() {
        // Arrange
        let (store, _tmp) = test_store();

        // Act
        let settings = store.load().unwrap();

        // Assert
        assert!(!settings.is_configured());
        assert_eq!(settings.token_expiry(), 0);
    }

    #[test]
    fn save_load_round_trip() {
        let (store, _tmp) = test_store();

        let mut settings = store.load().unwrap();
        settings.set_token("tok-123456789".to_string());
        settings.set_expiry(1_893_456_000_000);
        store.save(&settings).unwrap();

        let reloaded = store.load().unwrap();
        assert!(reloaded.is_configured());
        assert_eq!(reloaded.token_expiry(), 1_893_456_000_000);
    }

    #[test]
    fn clear_resets_to_defaults() {
        let (store, _tmp) = test_store();

        let mut settings = Settings::default();
        settings.set_token("tok-123456789".to_string());
        store.save(&settings).unwrap();

        store.clear().unwrap();

        let reloaded = store.load().unwrap();
        assert!(!reloaded.is_configured());
    }

    #[test]
    fn expired_token_is_configured_but_not_valid() {
        let mut settings = Settings::default();
        settings.set_token("tok-123456789".to_string());
        settings.set_expiry(Utc::now().timestamp_millis() - 1_000);

        assert!(settings.is_configured());
        assert!(!settings.has_valid_token());
    }

    #[test]
    fn token_inside_sixty_second_margin_is_not_valid() {
        let mut settings = Settings::default();
        settings.set_token("tok-123456789".to_string());
        settings.set_expiry(Utc::now().timestamp_millis() + 59_000);

        assert!(!settings.has_valid_token());
    }

    #[test]
    fn token_beyond_margin_is_valid() {
        let mut settings = Settings::default();
        settings.set_token("tok-123456789".to_string());
        settings.set_expiry(Utc::now().timestamp_millis() + 3_600_000);

        assert!(settings.has_valid_token());
    }

    #[test]
    fn masked_token_keeps_last_four_characters() {
        let mut settings = Settings::default();
        settings.set_token("tok-123456789".to_string());

        assert_eq!(settings.masked_token(), "****6789");
    }

    #[test]
    fn short_token_is_fully_masked() {
        let mut settings = Settings::default();
        settings.set_token("short".to_string());

        assert_eq!(settings.masked_token(), "****");
    }
}
