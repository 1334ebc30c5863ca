//! User registration and credential login.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use geticard_auth::jwt::JwtEncoder;
use geticard_auth::password::PasswordHasher;
use geticard_core::error::AppError;
use geticard_database::repositories::{CardRepository, UserRepository};
use geticard_entity::schema::parse;
use geticard_entity::user::{Credentials, NewUser, User};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed access token.
    pub access_token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Card whose contact email matches the login email, if any.
    pub card_id: Option<String>,
}

/// Handles account registration and login.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Card repository, for the post-login card lookup.
    card_repo: Arc<CardRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        card_repo: Arc<CardRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            card_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a new account from a raw request body.
    ///
    /// The existence check and the write are separate store calls, so two
    /// concurrent registrations for one email can both succeed; the later
    /// write wins.
    pub async fn register(&self, body: Value) -> Result<User, AppError> {
        let new_user: NewUser = parse(body)?;
        let email = new_user.email.clone().unwrap_or_default();

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let digest = self
            .hasher
            .hash_password(new_user.password.as_deref().unwrap_or_default());
        let user = new_user.into_user(digest);
        self.user_repo.insert(&user).await?;

        info!(email = %user.email, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, body: Value) -> Result<LoginOutcome, AppError> {
        let credentials: Credentials = parse(body)?;
        let email = credentials.email.unwrap_or_default();
        let password = credentials.password.unwrap_or_default();

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .filter(|user| self.hasher.verify_password(&password, &user.password))
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        let issued = self.encoder.issue(&user.email)?;
        let card_id = self
            .card_repo
            .find_by_contact_email(&user.email)
            .await?
            .map(|card| card.card_id);

        info!(email = %user.email, has_card = card_id.is_some(), "User logged in");
        Ok(LoginOutcome {
            access_token: issued.token,
            expires_at: issued.expires_at,
            card_id,
        })
    }
}
