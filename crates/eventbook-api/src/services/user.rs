// User profile service

use std::sync::Arc;

use eventbook_core::{Result, User};
use eventbook_storage::Database;
use uuid::Uuid;

use super::row_to_user;

pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Resolve the authenticated identity to its account record.
    /// Returns None when the token outlived the account.
    pub async fn profile(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = self.db.get_user(user_id).await?;
        row.map(row_to_user).transpose().map_err(Into::into)
    }
}
