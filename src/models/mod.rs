// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod color;
pub mod design;
pub mod post;
pub mod user;

pub use color::Color;
pub use design::Design;
pub use post::{Comment, Post};
pub use user::User;
