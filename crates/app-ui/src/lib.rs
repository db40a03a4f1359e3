//! User interface core for Tastebud
//!
//! This crate provides the client-side navigator and the chrome around
//! it. Rendering of individual screens (feeds, maps, AI features) lives
//! outside; this crate owns which screen is active, the back-navigable
//! history, the exclusive publish overlay, and when the bottom tab bar
//! is visible.
//!
//! # Modules
//!
//! - [`navigation`] - Screen identifiers, history stack, navigator, and
//!   the chrome visibility policy
//! - [`components`] - Tab bar and screen header view models
//! - [`screens`] - Renderer contract, dispatch registry, and the
//!   application shell
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavRequest, Screen};
//! use app_ui::screens::AppShell;
//!
//! let mut shell = AppShell::with_defaults();
//! shell.handle(NavRequest::Navigate {
//!     screen: Screen::Explore,
//!     payload: None,
//! });
//!
//! assert_eq!(shell.navigator().current_screen(), Screen::Explore);
//! assert!(shell.navigator().can_go_back());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;

// Re-export commonly used types
pub use components::{ScreenHeader, Tab, TabBar, TabItem};
pub use navigation::{is_chrome_visible, Display, NavRequest, Navigator, Screen, ScreenStack};
pub use screens::{
    AppShell, Body, Frame, PlaceholderRenderer, PublishRenderer, RecipeDetailRenderer,
    RestaurantDetailRenderer, ScreenRegistry, ScreenRenderer, ScreenView,
};
