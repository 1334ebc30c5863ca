//! Card repository implementation.

use std::sync::Arc;

use geticard_core::result::AppResult;
use geticard_core::traits::RecordStore;
use geticard_core::types::record::{Item, ScanFilter, TableDef};
use geticard_entity::card::Card;

use super::{from_item, to_item};

/// Repository for card records, keyed by `card_id`.
#[derive(Debug, Clone)]
pub struct CardRepository {
    store: Arc<dyn RecordStore>,
    table: TableDef,
}

impl CardRepository {
    /// Create a new card repository over `table_name`.
    pub fn new(store: Arc<dyn RecordStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table: TableDef::new(table_name, "card_id"),
        }
    }

    /// Find a card by id.
    pub async fn find_by_id(&self, card_id: &str) -> AppResult<Option<Card>> {
        self.store
            .get_item(&self.table, card_id)
            .await?
            .map(|item| from_item(item, &self.table.name))
            .transpose()
    }

    /// Find a card whose contact email equals `email`.
    ///
    /// Contact emails are not unique in the store; when several cards
    /// match, whichever the scan returns first wins.
    pub async fn find_by_contact_email(&self, email: &str) -> AppResult<Option<Card>> {
        let filter = ScanFilter::eq("emailContato", email);
        self.store
            .scan(&self.table, Some(&filter))
            .await?
            .into_iter()
            .next()
            .map(|item| from_item(item, &self.table.name))
            .transpose()
    }

    /// Write a card record, replacing any record with the same id.
    pub async fn save(&self, card: &Card) -> AppResult<()> {
        self.store.put_item(&self.table, to_item(card)?).await
    }

    /// Every record in the cards table, as stored.
    pub async fn list_all(&self) -> AppResult<Vec<Item>> {
        self.store.scan(&self.table, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRecordStore;
    use geticard_entity::card::NewCard;

    fn card(id: &str, email: &str) -> Card {
        NewCard {
            email_contato: Some(email.to_string()),
            nome: Some("A".to_string()),
            ..NewCard::default()
        }
        .into_card(id.to_string())
    }

    #[tokio::test]
    async fn test_save_and_lookup() {
        let repo = CardRepository::new(Arc::new(MemoryRecordStore::new()), "cards");
        let first = card("card-00000001", "a@x.com");
        repo.save(&first).await.unwrap();
        repo.save(&card("card-00000002", "b@x.com")).await.unwrap();

        assert_eq!(repo.find_by_id("card-00000001").await.unwrap(), Some(first.clone()));
        assert_eq!(repo.find_by_id("card-ffffffff").await.unwrap(), None);
        assert_eq!(
            repo.find_by_contact_email("a@x.com").await.unwrap(),
            Some(first)
        );
        assert_eq!(repo.find_by_contact_email("c@x.com").await.unwrap(), None);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_record_is_database_error() {
        let store = Arc::new(MemoryRecordStore::new());
        let repo = CardRepository::new(store.clone(), "cards");
        let mut item = Item::new();
        item.insert("card_id".to_string(), "card-00000003".into());
        store
            .put_item(&TableDef::new("cards", "card_id"), item)
            .await
            .unwrap();

        let err = repo.find_by_id("card-00000003").await.unwrap_err();
        assert_eq!(err.kind, geticard_core::error::ErrorKind::Database);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
