//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mockable::Clock;

use geticard_auth::jwt::{JwtDecoder, JwtEncoder};
use geticard_auth::password::PasswordHasher;
use geticard_core::config::AppConfig;
use geticard_core::traits::RecordStore;
use geticard_database::repositories::{CardRepository, UserRepository};
use geticard_service::{CardService, UserService};
use geticard_storage::ImageStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record store backend.
    pub store: Arc<dyn RecordStore>,
    /// Uploaded image storage.
    pub images: Arc<ImageStore>,
    /// Token verifier for protected routes.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login.
    pub user_service: Arc<UserService>,
    /// Card operations.
    pub card_service: Arc<CardService>,
}

impl AppState {
    /// Wire repositories, auth, and services over the given backends.
    ///
    /// The clock drives token issuance and expiry checks.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn RecordStore>,
        images: Arc<ImageStore>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(
            Arc::clone(&store),
            config.store.users_table.clone(),
        ));
        let card_repo = Arc::new(CardRepository::new(
            Arc::clone(&store),
            config.store.cards_table.clone(),
        ));

        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth, Arc::clone(&clock)));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, clock));

        let user_service = Arc::new(UserService::new(
            user_repo,
            Arc::clone(&card_repo),
            password_hasher,
            jwt_encoder,
        ));
        let card_service = Arc::new(CardService::new(card_repo, Arc::clone(&images)));

        Self {
            config: Arc::new(config),
            store,
            images,
            jwt_decoder,
            user_service,
            card_service,
        }
    }
}
