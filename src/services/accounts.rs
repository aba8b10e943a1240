// SPDX-License-Identifier: MIT

//! Account lookups over the user collection.
//!
//! Thin wrapper around the store's user operations so callers work in
//! terms of accounts rather than raw collections. Uniqueness is enforced
//! by the store at insert time, not here.

use std::sync::Arc;

use crate::db::Store;
use crate::error::Result;
use crate::models::User;

#[derive(Clone)]
pub struct AccountDirectory {
    store: Arc<dyn Store>,
}

impl AccountDirectory {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.store.find_user_by_email(email).await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.store.find_user_by_username(username).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        self.store.get_user(id).await
    }

    /// Persist a new account. Fails with a validation error if the email
    /// or username is already registered.
    pub async fn create(&self, user: &User) -> Result<()> {
        self.store.insert_user(user).await
    }
}
