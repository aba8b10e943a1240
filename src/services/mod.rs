// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod accounts;
pub mod credentials;
pub mod mutations;

pub use accounts::AccountDirectory;
pub use credentials::{Claims, CredentialService};
pub use mutations::{AuthSession, MutationService};
