//! Command handlers
//!
//! One module per subcommand group. Every read command goes through
//! [`client`], which enforces the local token preconditions before any
//! network call is made.

pub mod accounts;
pub mod balances;
pub mod beneficiaries;
pub mod config;
pub mod direct_debits;
pub mod standing_orders;
pub mod statements;
pub mod transactions;

use crate::client::ApiClient;
use crate::error::AppErrors as Error;
use crate::settings::SettingsStore;

/// Build an authenticated client from the default settings store.
pub(crate) fn client() -> Result<ApiClient, Error> {
    let store = SettingsStore::new()?;

    authorised_client(&store)
}

/// The local auth gate: a stored, unexpired token is required before the
/// command may touch the network.
pub(crate) fn authorised_client(store: &SettingsStore) -> Result<ApiClient, Error> {
    let settings = store.load()?;
    if !settings.is_configured() {
        return Err(Error::TokenNotConfigured);
    }
    if !settings.has_valid_token() {
        return Err(Error::TokenExpired);
    }

    ApiClient::new(&settings)
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod test {
    use chrono::Utc;

    use super::authorised_client;
    use crate::error::AppErrors as Error;
    use crate::tests::test::{configured_settings, test_store};

    #[test]
    fn missing_token_fails_the_gate_locally() {
        // Arrange
        let (store, _tmp) = test_store();

        // Act
        let result = authorised_client(&store);

        // Assert
        assert!(matches!(result, Err(Error::TokenNotConfigured)));
    }

    #[test]
    fn expired_token_fails_the_gate_locally() {
        let (store, _tmp) = test_store();
        let mut settings = configured_settings();
        settings.set_expiry(Utc::now().timestamp_millis() - 1_000);
        store.save(&settings).unwrap();

        assert!(matches!(
            authorised_client(&store),
            Err(Error::TokenExpired)
        ));
    }

    #[test]
    fn valid_token_passes_the_gate() {
        let (store, _tmp) = test_store();
        store.save(&configured_settings()).unwrap();

        assert!(authorised_client(&store).is_ok());
    }
}
