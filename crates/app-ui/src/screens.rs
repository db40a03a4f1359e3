//! Screen rendering dispatch for Tastebud
//!
//! This module defines the contract between the navigator and the screen
//! renderers:
//!
//! - [`ScreenRenderer`] - the single capability every screen implements
//! - [`ScreenRegistry`] - dispatch by screen identifier, with a home
//!   fallback for screens nothing registered
//! - [`AppShell`] - the composition root that owns the navigator, applies
//!   navigation requests, and assembles full frames
//!
//! Screen *content* lives outside this crate; the renderers shipped here
//! are placeholders plus the two detail pages, which consume the typed
//! navigation payload.

use std::collections::HashMap;

use app_core::content::Content;
use app_core::recipes::Recipe;
use app_core::restaurants::Restaurant;
use serde::{Deserialize, Serialize};

use crate::components::TabBar;
use crate::navigation::{Display, NavRequest, Navigator, Screen};

// =============================================================================
// Render Models
// =============================================================================

/// Body content of a rendered surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Body {
    /// Stand-in body for screens whose content is rendered elsewhere
    Placeholder {
        /// Text shown in the placeholder
        text: String,
    },
    /// A full recipe detail page
    Recipe {
        /// The recipe to display
        recipe: Recipe,
    },
    /// A full restaurant detail page
    Restaurant {
        /// The check-in to display
        restaurant: Restaurant,
    },
    /// Shown when a detail screen was reached without its content
    NotFound {
        /// Explanation text, e.g. "未找到菜谱信息"
        text: String,
    },
}

/// The render model for one full-viewport surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
    /// Title for the header or tab
    pub title: String,
    /// Main body content
    pub body: Body,
}

/// One fully-composed frame: the active surface plus optional chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The surface to display (overlay or top of stack)
    pub view: ScreenView,
    /// The bottom tab bar, absent while chrome is hidden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar: Option<TabBar>,
}

// =============================================================================
// Renderer Contract
// =============================================================================

/// A screen renderer.
///
/// Renderers receive the current navigation payload by reference and
/// produce a serializable view. They never mutate navigator state; user
/// interactions flow back to the shell as [`NavRequest`] values.
pub trait ScreenRenderer {
    /// Produce the view for this screen
    fn render(&self, payload: Option<&Content>) -> ScreenView;
}

/// Stand-in renderer for screens whose content lives outside this crate.
pub struct PlaceholderRenderer {
    screen: Screen,
}

impl PlaceholderRenderer {
    /// Create a placeholder for the given screen
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }
}

impl ScreenRenderer for PlaceholderRenderer {
    fn render(&self, _payload: Option<&Content>) -> ScreenView {
        ScreenView {
            title: self.screen.title().to_string(),
            body: Body::Placeholder {
                text: self.screen.title().to_string(),
            },
        }
    }
}

/// Recipe detail page renderer.
pub struct RecipeDetailRenderer;

impl ScreenRenderer for RecipeDetailRenderer {
    fn render(&self, payload: Option<&Content>) -> ScreenView {
        match payload.and_then(Content::as_recipe) {
            Some(recipe) => ScreenView {
                title: Screen::RecipeDetail.title().to_string(),
                body: Body::Recipe {
                    recipe: recipe.clone(),
                },
            },
            None => ScreenView {
                title: Screen::RecipeDetail.title().to_string(),
                body: Body::NotFound {
                    text: "未找到菜谱信息".to_string(),
                },
            },
        }
    }
}

/// Restaurant detail page renderer.
pub struct RestaurantDetailRenderer;

impl ScreenRenderer for RestaurantDetailRenderer {
    fn render(&self, payload: Option<&Content>) -> ScreenView {
        match payload.and_then(Content::as_restaurant) {
            Some(restaurant) => ScreenView {
                title: Screen::RestaurantDetail.title().to_string(),
                body: Body::Restaurant {
                    restaurant: restaurant.clone(),
                },
            },
            None => ScreenView {
                title: Screen::RestaurantDetail.title().to_string(),
                body: Body::NotFound {
                    text: "未找到餐厅信息".to_string(),
                },
            },
        }
    }
}

/// Renderer for the publish overlay.
pub struct PublishRenderer;

impl ScreenRenderer for PublishRenderer {
    fn render(&self, _payload: Option<&Content>) -> ScreenView {
        ScreenView {
            title: "发布".to_string(),
            body: Body::Placeholder {
                text: "发布".to_string(),
            },
        }
    }
}

// =============================================================================
// Screen Registry
// =============================================================================

/// Maps screen identifiers to their renderers.
///
/// The screen enumeration is closed, so a new screen kind is a
/// compile-time concern; the fallback only covers *partial registration*:
/// dispatching a screen nothing registered renders the home screen
/// instead of raising an error.
pub struct ScreenRegistry {
    renderers: HashMap<Screen, Box<dyn ScreenRenderer>>,
    fallback: Box<dyn ScreenRenderer>,
}

impl ScreenRegistry {
    /// Create an empty registry with the given home/fallback renderer
    pub fn new(fallback: Box<dyn ScreenRenderer>) -> Self {
        Self {
            renderers: HashMap::new(),
            fallback,
        }
    }

    /// Create a registry with a renderer for every screen: placeholders
    /// for the externally-rendered screens, real renderers for the two
    /// detail pages.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new(Box::new(PlaceholderRenderer::new(Screen::Recommend)));
        for screen in Screen::all() {
            match screen {
                Screen::RecipeDetail => {
                    registry.register(screen, Box::new(RecipeDetailRenderer));
                }
                Screen::RestaurantDetail => {
                    registry.register(screen, Box::new(RestaurantDetailRenderer));
                }
                _ => {
                    registry.register(screen, Box::new(PlaceholderRenderer::new(screen)));
                }
            }
        }
        registry
    }

    /// Register a renderer for a screen, replacing any previous one
    pub fn register(&mut self, screen: Screen, renderer: Box<dyn ScreenRenderer>) {
        self.renderers.insert(screen, renderer);
    }

    /// Render `screen`, falling back to the home renderer if nothing is
    /// registered for it
    pub fn render(&self, screen: Screen, payload: Option<&Content>) -> ScreenView {
        match self.renderers.get(&screen) {
            Some(renderer) => renderer.render(payload),
            None => {
                tracing::trace!(?screen, "no renderer registered, falling back to home");
                self.fallback.render(payload)
            }
        }
    }
}

// =============================================================================
// Application Shell
// =============================================================================

/// The composition root.
///
/// Owns the single process-wide [`Navigator`] together with the registry
/// and the publish renderer. Each user-interaction event is applied fully
/// (mutation, chrome recomputation, re-dispatch) before the next one.
pub struct AppShell {
    navigator: Navigator,
    registry: ScreenRegistry,
    publish: Box<dyn ScreenRenderer>,
}

impl AppShell {
    /// Create a shell from a registry and a publish-overlay renderer
    pub fn new(registry: ScreenRegistry, publish: Box<dyn ScreenRenderer>) -> Self {
        Self {
            navigator: Navigator::new(),
            registry,
            publish,
        }
    }

    /// Create a shell with the default registry and publish renderer
    pub fn with_defaults() -> Self {
        Self::new(ScreenRegistry::with_defaults(), Box::new(PublishRenderer))
    }

    /// Read access to the navigator
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Apply one navigation request
    pub fn handle(&mut self, request: NavRequest) {
        match request {
            NavRequest::Navigate { screen, payload } => self.navigator.navigate(screen, payload),
            NavRequest::Back => self.navigator.back(),
            NavRequest::OpenPublish => self.navigator.open_publish(),
            NavRequest::ClosePublish => self.navigator.close_publish(),
        }
    }

    /// Produce the frame for the current state.
    ///
    /// The overlay wins over the stack; the tab bar is attached only when
    /// the chrome policy allows it.
    pub fn frame(&self) -> Frame {
        let view = match self.navigator.display() {
            Display::Publish => self.publish.render(None),
            Display::Screen(screen) => self
                .registry
                .render(screen, self.navigator.current_payload()),
        };
        Frame {
            view,
            tab_bar: TabBar::for_navigator(&self.navigator),
        }
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{Nutrition, Recipe};

    fn recipe(title: &str) -> Content {
        Content::Recipe(Recipe {
            id: "1".to_string(),
            title: title.to_string(),
            image: String::new(),
            likes: Default::default(),
            author: "测试".to_string(),
            avatar: String::new(),
            height: None,
            description: String::new(),
            time: "10分钟".to_string(),
            difficulty: "简单".to_string(),
            nutrition: Nutrition {
                calories: 100,
                protein: "5g".to_string(),
                fat: "3g".to_string(),
                carbs: "10g".to_string(),
            },
            ingredients: vec![],
            steps: vec![],
            comments: vec![],
        })
    }

    #[test]
    fn test_registry_dispatches_registered_renderer() {
        let registry = ScreenRegistry::with_defaults();
        let view = registry.render(Screen::Messages, None);
        assert_eq!(view.title, "消息");
    }

    #[test]
    fn test_registry_falls_back_to_home() {
        // Partial registration: nothing registered at all
        let registry = ScreenRegistry::new(Box::new(PlaceholderRenderer::new(Screen::Recommend)));
        let view = registry.render(Screen::Profile, None);
        assert_eq!(view.title, "推荐");
    }

    #[test]
    fn test_recipe_detail_renders_payload() {
        let registry = ScreenRegistry::with_defaults();
        let payload = recipe("番茄炒蛋");
        let view = registry.render(Screen::RecipeDetail, Some(&payload));
        match view.body {
            Body::Recipe { recipe } => assert_eq!(recipe.title, "番茄炒蛋"),
            other => panic!("expected recipe body, got {other:?}"),
        }
    }

    #[test]
    fn test_recipe_detail_without_payload_shows_not_found() {
        let registry = ScreenRegistry::with_defaults();
        let view = registry.render(Screen::RecipeDetail, None);
        assert_eq!(
            view.body,
            Body::NotFound {
                text: "未找到菜谱信息".to_string(),
            }
        );
    }

    #[test]
    fn test_restaurant_detail_rejects_recipe_payload() {
        // Wrong payload kind is treated the same as a missing payload
        let registry = ScreenRegistry::with_defaults();
        let payload = recipe("番茄炒蛋");
        let view = registry.render(Screen::RestaurantDetail, Some(&payload));
        assert_eq!(
            view.body,
            Body::NotFound {
                text: "未找到餐厅信息".to_string(),
            }
        );
    }

    #[test]
    fn test_shell_frame_shows_overlay_exclusively() {
        let mut shell = AppShell::with_defaults();
        shell.handle(NavRequest::OpenPublish);

        let frame = shell.frame();
        assert_eq!(frame.view.title, "发布");
        assert!(frame.tab_bar.is_none());
    }

    #[test]
    fn test_shell_navigate_from_overlay_lands_on_stack() {
        let mut shell = AppShell::with_defaults();
        shell.handle(NavRequest::OpenPublish);
        shell.handle(NavRequest::Navigate {
            screen: Screen::Explore,
            payload: None,
        });

        assert!(!shell.navigator().is_publish_open());
        let frame = shell.frame();
        assert_eq!(frame.view.title, "探索");
        assert!(frame.tab_bar.is_some());
    }

    #[test]
    fn test_shell_frame_serializes_without_hidden_chrome() {
        let mut shell = AppShell::with_defaults();
        shell.handle(NavRequest::Navigate {
            screen: Screen::MyKitchen,
            payload: None,
        });

        let json = serde_json::to_string(&shell.frame()).unwrap();
        assert!(!json.contains("tab_bar"));
    }
}
