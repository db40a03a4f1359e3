//! Restaurant check-in records
//!
//! A [`Restaurant`] is a published store visit: the place itself
//! (address, hours, phone), the visitor's rating and write-up, and the
//! comments left by other users.

use serde::{Deserialize, Serialize};

use crate::comments::Comment;
use crate::content::LikeCount;

/// A published restaurant check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique check-in id
    pub id: String,

    /// Post title as shown on feed cards and the detail header
    pub title: String,

    /// Cover image URL
    pub image: String,

    /// Like count as displayed in feeds
    #[serde(default)]
    pub likes: LikeCount,

    /// Display name of the author
    pub author: String,

    /// Author avatar URL
    pub avatar: String,

    /// Card height hint for the masonry feed layout, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Street address of the restaurant
    pub address: String,

    /// Star rating out of 5
    pub rating: f32,

    /// Opening hours, e.g. "10:00 - 22:00"
    pub hours: String,

    /// Contact phone number
    pub phone: String,

    /// The author's write-up
    pub description: String,

    /// Comments left on this check-in
    #[serde(default)]
    pub comments: Vec<Comment>,
}
