//! User repository implementation.

use std::sync::Arc;

use geticard_core::result::AppResult;
use geticard_core::traits::RecordStore;
use geticard_core::types::record::TableDef;
use geticard_entity::user::User;

use super::{from_item, to_item};

/// Repository for user records, keyed by email.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<dyn RecordStore>,
    table: TableDef,
}

impl UserRepository {
    /// Create a new user repository over `table_name`.
    pub fn new(store: Arc<dyn RecordStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table: TableDef::new(table_name, "email"),
        }
    }

    /// Find a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store
            .get_item(&self.table, email)
            .await?
            .map(|item| from_item(item, &self.table.name))
            .transpose()
    }

    /// Write a user record, replacing any record with the same email.
    pub async fn insert(&self, user: &User) -> AppResult<()> {
        self.store.put_item(&self.table, to_item(user)?).await
    }
}
