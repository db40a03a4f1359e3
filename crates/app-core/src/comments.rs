//! User comments
//!
//! Comments are attached to both recipes and restaurant check-ins and
//! share one shape: an author, a body, a relative date, and an optional
//! star rating (restaurant reviews and tried-it recipe feedback).

use serde::{Deserialize, Serialize};

/// A single user comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment id
    pub id: String,

    /// Display name of the commenter
    pub user: String,

    /// Avatar image URL
    pub avatar: String,

    /// Comment body text
    pub content: String,

    /// Human-readable relative date, e.g. "2天前"
    pub date: String,

    /// Star rating from 1 to 5, when the comment is a review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserializes_feed_shape() {
        let json = r#"{
            "id": "1",
            "user": "美食爱好者",
            "avatar": "https://example.com/a.jpg",
            "content": "按照步骤做出来很成功！",
            "date": "2天前",
            "rating": 5
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.user, "美食爱好者");
        assert_eq!(comment.rating, Some(5));
    }

    #[test]
    fn test_comment_rating_is_optional() {
        let json = r#"{
            "id": "2",
            "user": "小厨娘",
            "avatar": "https://example.com/b.jpg",
            "content": "味道不错",
            "date": "5天前"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.rating, None);

        // Absent rating should not be serialized back out
        let out = serde_json::to_string(&comment).unwrap();
        assert!(!out.contains("rating"));
    }
}
