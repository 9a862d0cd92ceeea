#[cfg(test)]
pub mod test {
    use chrono::Utc;
    use once_cell::sync::Lazy;
    use temp_dir::TempDir;

    use crate::settings::{Settings, SettingsStore};
    use crate::telemetry::{get_subscriber, init_subscriber};

    // The `tracing` stack may only be initialised once per process.
    static TRACING: Lazy<()> = Lazy::new(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();
        // The sink is part of the type returned by `get_subscriber`, so the
        // two branches can't share a variable.
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            init_subscriber(subscriber).expect("Failed to initialise the subscriber");
        } else {
            let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            init_subscriber(subscriber).expect("Failed to initialise the subscriber");
        };
    });

    /// Create an ephemeral settings store. Folder is deleted when the TempDir
    /// goes out of scope.
    pub fn test_store() -> (SettingsStore, TempDir) {
        Lazy::force(&TRACING);

        let dir = TempDir::with_prefix("openbanking-test").unwrap();
        let store = SettingsStore::with_path(dir.path().join("settings.toml"));

        (store, dir)
    }

    /// Settings carrying a token that stays valid for the length of a test run.
    pub fn configured_settings() -> Settings {
        let mut settings = Settings::default();
        settings.set_token("test-token-123456".to_string());
        settings.set_expiry(Utc::now().timestamp_millis() + 3_600_000);

        settings
    }
}
