// SPDX-License-Identifier: MIT

//! Hueboard: accounts, colors, designs, and posts behind one bearer-token API.
//!
//! This crate provides the backend write path: sign-up and sign-in issue
//! one-hour tokens, and every other mutation requires one.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use db::Store;
use services::{CredentialService, MutationService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub credentials: CredentialService,
    pub mutations: MutationService,
}
