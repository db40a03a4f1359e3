//! Recipe records
//!
//! A [`Recipe`] is a published cooking post: cover image, description,
//! timing and difficulty, per-serving nutrition, and the ingredient and
//! step lists rendered by the recipe detail screen.

use serde::{Deserialize, Serialize};

use crate::comments::Comment;
use crate::content::LikeCount;

/// Per-serving nutrition facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: u32,

    /// Protein amount with unit, e.g. "25g"
    pub protein: String,

    /// Fat amount with unit
    pub fat: String,

    /// Carbohydrate amount with unit
    pub carbs: String,
}

/// A published recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe id
    pub id: String,

    /// Recipe title as shown on feed cards and the detail header
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

    /// Short description shown above the ingredient list
    pub description: String,

    /// Estimated cooking time, e.g. "15分钟"
    pub time: String,

    /// Difficulty label, e.g. "简单"
    pub difficulty: String,

    /// Nutrition facts
    pub nutrition: Nutrition,

    /// Ingredient lines, quantity included, e.g. "牛油果 1个"
    pub ingredients: Vec<String>,

    /// Ordered cooking steps
    pub steps: Vec<String>,

    /// Comments left on this recipe
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "1",
            "title": "🥑 牛油果大虾沙拉",
            "image": "https://example.com/salad.jpg",
            "likes": "1.2k",
            "author": "HealthyLife",
            "avatar": "https://example.com/avatar.jpg",
            "height": 220,
            "description": "低脂健康，非常适合减脂期食用。",
            "time": "15分钟",
            "difficulty": "简单",
            "nutrition": {
                "calories": 320,
                "protein": "25g",
                "fat": "15g",
                "carbs": "12g"
            },
            "ingredients": ["牛油果 1个", "鲜虾 8-10只"],
            "steps": ["将鲜虾去壳去虾线，煮熟备用。", "牛油果去皮切块。"]
        }"#
    }

    #[test]
    fn test_recipe_deserializes_feed_shape() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(recipe.title, "🥑 牛油果大虾沙拉");
        assert_eq!(recipe.nutrition.calories, 320);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.likes, LikeCount::Approx("1.2k".to_string()));
        // Comments default to empty when missing
        assert!(recipe.comments.is_empty());
    }

    #[test]
    fn test_recipe_round_trips() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe, parsed);
    }
}
