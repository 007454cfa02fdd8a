//! Session commands: login, logout, whoami.

use craftica_client::models::LoginCredentials;
use craftica_core::Email;

use super::{CliError, resources};

/// Log in with email and password and persist the session.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let email = Email::parse(email).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let resources = resources()?;
    let user = resources
        .client()
        .login(&LoginCredentials {
            email,
            password: password.to_owned(),
        })
        .await?;

    tracing::info!(
        "Logged in as {} {} ({})",
        user.first_names,
        user.last_names,
        user.credential.email
    );
    Ok(())
}

/// Clear the persisted session.
pub fn logout() -> Result<(), CliError> {
    let resources = resources()?;
    resources.client().logout()?;
    resources.invalidate_all();
    tracing::info!("Logged out");
    Ok(())
}

/// Show the currently logged-in user, if any.
pub fn whoami() -> Result<(), CliError> {
    let resources = resources()?;
    match resources.client().session().user() {
        Some(user) => {
            tracing::info!("Logged in as:");
            tracing::info!("  Name: {} {}", user.first_names, user.last_names);
            tracing::info!("  Email: {}", user.credential.email);
            tracing::info!("  City: {}, {}", user.location.city, user.location.country);
        }
        None => tracing::info!("Not logged in"),
    }
    Ok(())
}
