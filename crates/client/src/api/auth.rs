//! Authentication operations.
//!
//! Login success is signaled by the `"Usuario logueado"` status phrase. The
//! backend does not return a token, so a placeholder token is stored and
//! attached to later calls until it starts issuing real ones.

use secrecy::SecretString;
use serde_json::Value;
use tracing::instrument;

use craftica_core::UserId;

use crate::error::{ApiError, EntityKind};
use crate::models::{LoginCredentials, NewUser, User, UserUpdate};

use super::CrafticaClient;
use super::normalize::{StatusContract, decode_created, decode_entity};

/// Placeholder token used until the backend starts issuing real ones.
const PLACEHOLDER_TOKEN: &str = "temp_token";

const LOGIN: StatusContract = StatusContract {
    phrase: "Usuario logueado",
    entity_key: "user",
    fallback: "Error en el login",
};

impl CrafticaClient {
    /// Log in and establish the session (memory + durable storage).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's phrase when the
    /// credentials are refused, or a storage error if the session snapshot
    /// cannot be persisted.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        let raw = self
            .execute(self.post("/usuarios/login").json(credentials))
            .await?;
        let user: User = decode_created(raw, LOGIN)?;

        self.session()
            .establish(user.clone(), SecretString::from(PLACEHOLDER_TOKEN))?;

        Ok(user)
    }

    /// Register a new account, then log in with its credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if registration or the follow-up login fails.
    #[instrument(skip(self, user))]
    pub async fn register(&self, user: &NewUser) -> Result<User, ApiError> {
        self.execute(self.post("/usuarios").json(user)).await?;

        let credentials = LoginCredentials {
            email: user.credential.email.clone(),
            password: user.credential.password.clone(),
        };
        self.login(&credentials).await
    }

    /// Tear down the session.
    ///
    /// # Errors
    ///
    /// Returns an error if durable storage cannot be cleared.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session().terminate()?;
        Ok(())
    }

    /// Fetch a user profile by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the response lacks the identity
    /// field, or another error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_profile(&self, id: &UserId) -> Result<User, ApiError> {
        let raw = self.execute(self.get(&format!("/usuarios/{id}"))).await?;
        decode_profile(raw)
    }

    /// Update a user profile. Plain 2xx contract, no status phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_profile(&self, id: &UserId, update: &UserUpdate) -> Result<(), ApiError> {
        self.execute(self.put(&format!("/usuarios/{id}")).json(update))
            .await?;
        Ok(())
    }
}

/// The profile endpoint sometimes wraps the user as `{data: ...}` and
/// sometimes returns it bare; accept both.
fn decode_profile(raw: Value) -> Result<User, ApiError> {
    let raw = match raw {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    decode_entity(raw, EntityKind::User)
}
