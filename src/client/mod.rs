//! HTTP client for the account information API
//!
//! Builds authenticated GET requests against the API base URL, unwraps the
//! `{ "Data": { ... } }` response envelope and classifies HTTP failures
//! into the error kinds the commands report.

use core::fmt;

use chrono::NaiveDate;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::AppErrors as Error;
use crate::settings::Settings;

mod accounts;
mod balances;
mod beneficiaries;
mod direct_debits;
mod standing_orders;
mod statements;
mod transactions;

/// Default AISP base. `OPEN_BANKING_API_URL` overrides it.
const DEFAULT_BASE_URL: &str = "https://ob.sandbox.natwest.com/open-banking/v3.1/aisp/";

const BASE_URL_ENV: &str = "OPEN_BANKING_API_URL";

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize, thiserror::Error)]
pub struct ErrorJson {
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
}

impl fmt::Display for ErrorJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({})", self.message, self.code)
        }
    }
}

pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ApiClient {
    /// Build a client authenticated with the stored access token.
    ///
    /// # Errors
    /// Will return an error if no token is configured, or if the token
    /// can't form a valid header value. No network I/O happens here.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::with_base_url(settings, &base_url)
    }

    /// Build a client against an explicit base URL.
    ///
    /// # Errors
    /// Will return an error if no token is configured or the URL is invalid.
    pub fn with_base_url(settings: &Settings, base_url: &str) -> Result<Self, Error> {
        if !settings.is_configured() {
            return Err(Error::TokenNotConfigured);
        }

        // Url::join treats the last path segment as a file unless the base
        // ends with a slash.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        let mut headers = HeaderMap::new();
        let auth_header_value =
            format!("Bearer {}", settings.access_token().expose_secret());
        let mut auth_header_value = HeaderValue::from_str(&auth_header_value)?;
        auth_header_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_header_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(ApiClient { base_url, client })
    }

    /// Issue a GET against `path` and deserialise the enveloped response.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        tracing::info!("url: {}", url);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;

        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            let deserializer = &mut serde_json::Deserializer::from_slice(&body);

            serde_path_to_error::deserialize(deserializer)
                .map_err(|e| Error::ResponseError(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorJson>(&body)
                .map(|e| e.to_string())
                .unwrap_or(body);

            Err(classify_status(status, message))
        }
    }
}

/// Map a non-2xx status onto the error taxonomy.
fn classify_status(status: StatusCode, message: String) -> Error {
    let message = if message.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no further detail")
            .to_string()
    } else {
        message
    };

    match status {
        StatusCode::UNAUTHORIZED => Error::AuthenticationFailure(message),
        StatusCode::FORBIDDEN => Error::AuthorisationFailure(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited,
        _ => Error::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

/// Booking-date query parameters for date-ranged operations. Each bound is
/// attached only when supplied; `from` opens the day, `to` closes it.
pub(crate) fn booking_date_query(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(from) = from {
        query.push((
            "fromBookingDateTime",
            format!("{}T00:00:00Z", from.format("%Y-%m-%d")),
        ));
    }
    if let Some(to) = to {
        query.push((
            "toBookingDateTime",
            format!("{}T23:59:59Z", to.format("%Y-%m-%d")),
        ));
    }

    query
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use reqwest::StatusCode;

    use super::{booking_date_query, classify_status, ApiClient};
    use crate::error::AppErrors as Error;
    use crate::settings::Settings;
    use crate::tests::test::configured_settings;

    #[test]
    fn unconfigured_settings_are_rejected_before_any_request() {
        // Arrange
        let settings = Settings::default();

        // Act
        let result = ApiClient::new(&settings);

        // Assert
        assert!(matches!(result, Err(Error::TokenNotConfigured)));
    }

    #[test]
    fn token_with_control_characters_is_a_local_error() {
        let mut settings = configured_settings();
        settings.set_token("bad\ntoken".to_string());

        let result = ApiClient::new(&settings);

        assert!(matches!(result, Err(Error::InvalidHeaderValue(_))));
    }

    #[test]
    fn configured_settings_build_a_client() {
        let settings = configured_settings();

        assert!(ApiClient::with_base_url(&settings, "https://example.com/aisp").is_ok());
    }

    #[test]
    fn status_classification_matches_the_taxonomy() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, "denied".to_string()),
            Error::AuthenticationFailure(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, "scope".to_string()),
            Error::AuthorisationFailure(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, "gone".to_string()),
            Error::NotFound(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string()),
            Error::RateLimited
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            Error::ApiError { status: 500, .. }
        ));
    }

    #[test]
    fn both_date_bounds_set_both_parameters() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let query = booking_date_query(Some(from), Some(to));

        assert_eq!(
            query,
            vec![
                ("fromBookingDateTime", "2024-01-01T00:00:00Z".to_string()),
                ("toBookingDateTime", "2024-01-31T23:59:59Z".to_string()),
            ]
        );
    }

    #[test]
    fn omitting_a_bound_omits_only_that_parameter() {
        let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let query = booking_date_query(None, Some(to));

        assert_eq!(query.len(), 1);
        assert_eq!(query[0].0, "toBookingDateTime");
    }

    #[test]
    fn no_bounds_means_no_parameters() {
        assert!(booking_date_query(None, None).is_empty());
    }
}
