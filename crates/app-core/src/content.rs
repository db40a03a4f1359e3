//! Content kinds
//!
//! Feed cards and navigation payloads carry either a recipe or a
//! restaurant check-in, discriminated by a `"type"` tag in the wire
//! shape. [`Content`] is that discriminated union; parsing untrusted
//! card JSON goes through [`Content::from_json`] so an unknown kind is
//! reported instead of silently misparsed.

use serde::{Deserialize, Serialize};

use crate::recipes::Recipe;
use crate::restaurants::Restaurant;

/// Errors that can occur when parsing content records.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// JSON did not match the shape of the tagged kind
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The `"type"` tag named a kind this client does not know
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),

    /// The `"type"` tag was absent
    #[error("Missing content kind tag")]
    MissingKind,
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Like count as displayed in feeds: either an exact number or an
/// abbreviated string such as "1.2k".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LikeCount {
    /// Exact count
    Count(u64),
    /// Abbreviated display string
    Approx(String),
}

impl Default for LikeCount {
    fn default() -> Self {
        LikeCount::Count(0)
    }
}

/// A piece of published content: a recipe or a restaurant check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// A cooking recipe
    Recipe(Recipe),
    /// A restaurant check-in
    Restaurant(Restaurant),
}

impl Content {
    /// Title shown on the card for this content, regardless of kind.
    pub fn title(&self) -> &str {
        match self {
            Content::Recipe(recipe) => &recipe.title,
            Content::Restaurant(restaurant) => &restaurant.title,
        }
    }

    /// The recipe record, if this content is a recipe.
    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Content::Recipe(recipe) => Some(recipe),
            Content::Restaurant(_) => None,
        }
    }

    /// The restaurant record, if this content is a check-in.
    pub fn as_restaurant(&self) -> Option<&Restaurant> {
        match self {
            Content::Restaurant(restaurant) => Some(restaurant),
            Content::Recipe(_) => None,
        }
    }

    /// Parse a content record from card JSON.
    ///
    /// The `"type"` tag is checked first so an unrecognized kind surfaces
    /// as [`ContentError::UnknownKind`] rather than a generic parse error.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some("recipe") | Some("restaurant") => Ok(serde_json::from_value(value)?),
            Some(other) => {
                tracing::warn!(kind = other, "discarding content of unknown kind");
                Err(ContentError::UnknownKind(other.to_string()))
            }
            None => Err(ContentError::MissingKind),
        }
    }
}
