// SPDX-License-Identifier: MIT

//! In-memory Store backend.
//!
//! Reference implementation used by the server binary and the test suite.
//! Colors, designs, and posts live in `DashMap`s (every operation on them is
//! a single-key access). Users live behind one `RwLock`ed map because the
//! unique email/username scan and the insert must share a critical section.

use std::collections::HashMap;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::RwLock;

use crate::db::store::{Store, EMAIL_TAKEN, USERNAME_TAKEN};
use crate::error::{AppError, Result};
use crate::models::{Color, Design, Post, User};

/// In-memory document store. Cheap to create; every test gets a fresh one.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    colors: DashMap<String, Color>,
    designs: DashMap<String, Design>,
    posts: DashMap<String, Post>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<()> {
        // Scan and insert under one write lock: the unique index must hold
        // even when two sign-ups race.
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::Validation(EMAIL_TAKEN.to_string()));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::Validation(USERNAME_TAKEN.to_string()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn insert_color(&self, color: &Color) -> Result<()> {
        self.colors.insert(color.id.clone(), color.clone());
        Ok(())
    }

    async fn delete_color(&self, id: &str) -> Result<bool> {
        Ok(self.colors.remove(id).is_some())
    }

    async fn insert_design(&self, design: &Design) -> Result<()> {
        self.designs.insert(design.id.clone(), design.clone());
        Ok(())
    }

    async fn insert_post(&self, post: &Post) -> Result<()> {
        self.posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts.get(id).map(|entry| entry.value().clone()))
    }

    async fn update_post(&self, id: &str, post: &Post) -> Result<Option<Post>> {
        match self.posts.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(post.clone());
                Ok(Some(post.clone()))
            }
            Entry::Vacant(_) => Ok(None),
        }
    }

    async fn delete_post(&self, id: &str) -> Result<bool> {
        Ok(self.posts.remove(id).is_some())
    }
}
