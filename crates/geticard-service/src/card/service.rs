//! Card lifecycle: create, fetch, edit, and diagnostic listing.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use geticard_core::error::{AppError, FieldError};
use geticard_core::types::record::Item;
use geticard_database::repositories::CardRepository;
use geticard_entity::card::{Card, NewCard, generate_card_id};
use geticard_entity::schema::parse;
use geticard_storage::ImageStore;

/// Outcome of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCreation {
    /// A new card was stored.
    Created { card_id: String },
    /// A card with the same contact email already existed; nothing was written.
    Existing { card_id: String },
}

impl CardCreation {
    /// The id of the new or existing card.
    pub fn card_id(&self) -> &str {
        match self {
            Self::Created { card_id } | Self::Existing { card_id } => card_id,
        }
    }
}

/// Handles card operations.
#[derive(Debug, Clone)]
pub struct CardService {
    /// Card repository.
    card_repo: Arc<CardRepository>,
    /// Image storage for profile photos and gallery images.
    images: Arc<ImageStore>,
}

impl CardService {
    /// Creates a new card service.
    pub fn new(card_repo: Arc<CardRepository>, images: Arc<ImageStore>) -> Self {
        Self { card_repo, images }
    }

    /// Creates a card from a raw request body.
    ///
    /// Creation is idempotent per contact email: when a card already uses
    /// the email, its id is returned and the rest of the body is ignored.
    /// As with registration, the lookup and the write are not atomic.
    pub async fn create(&self, body: Value) -> Result<CardCreation, AppError> {
        let email = contact_email(&body)?;

        if let Some(existing) = self.card_repo.find_by_contact_email(&email).await? {
            info!(card_id = %existing.card_id, "Card already exists for contact email");
            return Ok(CardCreation::Existing {
                card_id: existing.card_id,
            });
        }

        let new_card: NewCard = parse(body)?;
        let card_id = generate_card_id();

        let mut stored = Vec::new();
        let card = match self.persist(new_card, card_id.clone(), &mut stored).await {
            Ok(card) => card,
            Err(e) => {
                self.images.discard(&card_id, &stored).await;
                return Err(e);
            }
        };

        info!(card_id = %card.card_id, "Card created");
        Ok(CardCreation::Created {
            card_id: card.card_id,
        })
    }

    /// Writes the card's images, then the record. Image references written
    /// so far are collected in `stored`.
    async fn persist(
        &self,
        mut new_card: NewCard,
        card_id: String,
        stored: &mut Vec<String>,
    ) -> Result<Card, AppError> {
        new_card.foto_perfil = match new_card.foto_perfil.take() {
            Some(photo) if !photo.trim().is_empty() => {
                let reference = self.images.save(&photo, &card_id).await?;
                stored.push(reference.clone());
                Some(reference)
            }
            _ => None,
        };
        if let Some(gallery) = new_card.galeria.take() {
            let references = self.images.save_gallery(&gallery, &card_id).await?;
            stored.extend(references.iter().cloned());
            new_card.galeria = Some(references);
        }

        let card = new_card.into_card(card_id);
        self.card_repo.save(&card).await?;
        Ok(card)
    }

    /// Fetches a card by id.
    pub async fn get(&self, card_id: &str) -> Result<Card, AppError> {
        self.card_repo
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::not_found("Card not found"))
    }

    /// Applies an allow-listed update to an existing card and stores it.
    ///
    /// `foto_perfil` is stored as given; it is not decoded or written to
    /// image storage.
    pub async fn update(&self, card_id: &str, body: Value) -> Result<Card, AppError> {
        let Value::Object(fields) = body else {
            return Err(AppError::invalid_fields(
                "Request body must be a JSON object",
                vec![FieldError::new("body", "type", "expected a JSON object")],
            ));
        };

        let mut card = self.get(card_id).await?;
        let applied = card.apply_update(&fields)?;
        self.card_repo.save(&card).await?;

        info!(card_id, fields = ?applied, "Card updated");
        Ok(card)
    }

    /// Every stored card record, unvalidated.
    pub async fn list_all(&self) -> Result<Vec<Item>, AppError> {
        self.card_repo.list_all().await
    }
}

fn contact_email(body: &Value) -> Result<String, AppError> {
    match body.get("emailContato").and_then(Value::as_str) {
        Some(email) if !email.trim().is_empty() => Ok(email.to_string()),
        _ => Err(AppError::invalid_fields(
            "emailContato is required",
            vec![FieldError::new(
                "emailContato",
                "required",
                "emailContato is required",
            )],
        )),
    }
}
