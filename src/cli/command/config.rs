//! Manage the stored access token
//!
//! `set` writes the token/expiry, `show` prints them (token masked), and
//! `clear` resets the settings file wholesale after confirmation.

use chrono::DateTime;
use colored::Colorize;
use dialoguer::Confirm;

use crate::error::AppErrors as Error;
use crate::settings::SettingsStore;

pub fn set(token: Option<String>, expiry: Option<i64>) -> Result<(), Error> {
    if token.is_none() && expiry.is_none() {
        return Err(Error::InvalidRequest(
            "nothing to set - pass --token and/or --expiry".to_string(),
        ));
    }

    let store = SettingsStore::new()?;
    let mut settings = store.load()?;
    if let Some(token) = token {
        settings.set_token(token);
    }
    if let Some(expiry) = expiry {
        settings.set_expiry(expiry);
    }
    store.save(&settings)?;

    println!("Settings saved to {}", store.path().display());

    Ok(())
}

pub fn show() -> Result<(), Error> {
    let store = SettingsStore::new()?;
    let settings = store.load()?;

    println!("access_token : {}", settings.masked_token());
    println!("token_expiry : {}", describe_expiry(settings.token_expiry()));
    println!(
        "token valid  : {}",
        if settings.has_valid_token() { "yes" } else { "no" }
    );

    Ok(())
}

pub fn clear() -> Result<(), Error> {
    if !confirm_clear()? {
        println!("Aborting");
        return Ok(());
    }

    let store = SettingsStore::new()?;
    store.clear()?;

    println!("Settings cleared");

    Ok(())
}

fn confirm_clear() -> Result<bool, Error> {
    println!(
        "{} {}",
        "WARNING".red(),
        "This removes the saved access token".bold()
    );
    let confirmation = Confirm::new()
        .with_prompt("Do you want to continue?")
        .interact()?;

    Ok(confirmation)
}

fn describe_expiry(expiry: i64) -> String {
    if expiry == 0 {
        return "<not set>".to_string();
    }
    match DateTime::from_timestamp_millis(expiry) {
        Some(instant) => format!("{expiry} ({})", instant.to_rfc3339()),
        None => expiry.to_string(),
    }
}

// -- Tests ----------------------------------------------------------------
