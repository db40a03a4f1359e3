//! Core domain records for Tastebud
//!
//! This crate contains the content types the client displays: recipes,
//! restaurant check-ins, and the comments attached to both. Screen
//! renderers consume these records; the navigation layer carries them
//! as typed payloads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comments;
pub mod content;
pub mod recipes;
pub mod restaurants;

pub use comments::Comment;
pub use content::{Content, ContentError, LikeCount};
pub use recipes::{Nutrition, Recipe};
pub use restaurants::Restaurant;
