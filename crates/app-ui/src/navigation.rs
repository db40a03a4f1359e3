//! Navigation system for Tastebud
//!
//! This module provides the client-side navigator:
//! - A closed set of screen identifiers
//! - Back-navigable history stack management
//! - The exclusive publish overlay
//! - The chrome visibility policy for the bottom tab bar
//!
//! One [`Navigator`] instance is owned by the application shell for the
//! lifetime of the process; every mutation goes through its operations.

use app_core::content::Content;
use serde::{Deserialize, Serialize};

// =============================================================================
// Screen Identifiers
// =============================================================================

/// All screens the client can display.
///
/// The publish flow is deliberately absent: it is an exclusive overlay
/// ([`Navigator::open_publish`]) and never enters the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Home feed of recommended content
    #[default]
    Recommend,
    /// Explore grid with search
    Explore,
    /// "What should I eat today" picker
    WhatToEat,
    /// AI kitchen feature hub
    AiKitchen,
    /// The user's fridge and pantry
    MyKitchen,
    /// Message inbox
    Messages,
    /// The user's own profile
    Profile,
    /// Recipe detail page
    RecipeDetail,
    /// Restaurant check-in detail page
    RestaurantDetail,
}

impl Screen {
    /// Get the display title for this screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Recommend => "推荐",
            Screen::Explore => "探索",
            Screen::WhatToEat => "今天吃什么",
            Screen::AiKitchen => "AI厨房",
            Screen::MyKitchen => "我的冰箱",
            Screen::Messages => "消息",
            Screen::Profile => "我的",
            Screen::RecipeDetail => "菜谱详情",
            Screen::RestaurantDetail => "餐厅详情",
        }
    }

    /// Get all screens in declaration order
    pub fn all() -> [Screen; 9] {
        [
            Screen::Recommend,
            Screen::Explore,
            Screen::WhatToEat,
            Screen::AiKitchen,
            Screen::MyKitchen,
            Screen::Messages,
            Screen::Profile,
            Screen::RecipeDetail,
            Screen::RestaurantDetail,
        ]
    }
}

// =============================================================================
// Chrome Visibility Policy
// =============================================================================

/// Whether the persistent bottom tab bar should render.
///
/// Stateless policy, re-evaluated after every navigator mutation: the bar
/// is hidden while the publish overlay is active, and on full-viewport
/// screens (the what-to-eat picker, both detail pages, and the fridge).
pub fn is_chrome_visible(screen: Screen, overlay_active: bool) -> bool {
    if overlay_active {
        return false;
    }
    !matches!(
        screen,
        Screen::WhatToEat | Screen::RecipeDetail | Screen::RestaurantDetail | Screen::MyKitchen
    )
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// Ordered history of visited screens (bottom to top).
///
/// Invariant: never empty. The last element is the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenStack {
    entries: Vec<Screen>,
}

impl ScreenStack {
    /// Create a new stack holding only the given root screen
    pub fn new(root: Screen) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// Push a screen onto the stack
    pub fn push(&mut self, screen: Screen) {
        self.entries.push(screen);
    }

    /// Pop the top screen (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Get the current (top) screen
    pub fn current(&self) -> Screen {
        *self.entries.last().expect("stack is never empty")
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries, oldest first
    pub fn entries(&self) -> &[Screen] {
        &self.entries
    }
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new(Screen::Recommend)
    }
}

// =============================================================================
// Navigation Requests
// =============================================================================

/// A navigation request raised by a screen renderer or chrome element.
///
/// Renderers never mutate the navigator directly; user interactions come
/// back to the application shell as request values, which the shell
/// applies in event order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "kebab-case")]
pub enum NavRequest {
    /// Push a screen, optionally carrying the content it should display
    Navigate {
        /// Target screen
        screen: Screen,
        /// Content payload for the target screen
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Content>,
    },
    /// Return to the previous screen
    Back,
    /// Open the publish overlay
    OpenPublish,
    /// Close the publish overlay
    ClosePublish,
}

// =============================================================================
// Navigator
// =============================================================================

/// What the application shell should currently put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// The exclusive publish overlay
    Publish,
    /// The top of the history stack
    Screen(Screen),
}

/// The controller of record for screen navigation.
///
/// Owns the history stack, the single current-payload slot, and the
/// publish overlay flag. The payload slot belongs to the most recent
/// `navigate` call only; going back clears it rather than restoring the
/// previous screen's payload, matching browser-style history semantics
/// for the stateless list screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Navigator {
    stack: ScreenStack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Content>,
    publish_open: bool,
}

impl Navigator {
    /// Create a navigator showing the home feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `screen` onto the history stack and hand it `payload`.
    ///
    /// Always closes the publish overlay: a navigation from inside the
    /// publish flow lands on the stack, not under the overlay. This
    /// operation cannot fail.
    pub fn navigate(&mut self, screen: Screen, payload: Option<Content>) {
        tracing::debug!(?screen, depth = self.stack.depth() + 1, "navigate");
        self.stack.push(screen);
        self.payload = payload;
        self.publish_open = false;
    }

    /// Return to the previous screen.
    ///
    /// Pops the top entry and clears the payload slot. At the root this
    /// is a silent no-op. The overlay flag is left untouched.
    pub fn back(&mut self) {
        if self.stack.pop() {
            self.payload = None;
            tracing::debug!(screen = ?self.stack.current(), "back");
        }
    }

    /// Open the publish overlay. Idempotent.
    pub fn open_publish(&mut self) {
        if !self.publish_open {
            tracing::debug!("open publish overlay");
            self.publish_open = true;
        }
    }

    /// Close the publish overlay. Idempotent.
    pub fn close_publish(&mut self) {
        if self.publish_open {
            tracing::debug!("close publish overlay");
            self.publish_open = false;
        }
    }

    /// The screen at the top of the history stack.
    ///
    /// Note that while the overlay is open this screen exists but is not
    /// displayed; see [`Navigator::display`].
    pub fn current_screen(&self) -> Screen {
        self.stack.current()
    }

    /// Content handed to the most recent `navigate`, if any
    pub fn current_payload(&self) -> Option<&Content> {
        self.payload.as_ref()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// Whether the publish overlay is active
    pub fn is_publish_open(&self) -> bool {
        self.publish_open
    }

    /// The surface to display: the overlay wins over the stack
    pub fn display(&self) -> Display {
        if self.publish_open {
            Display::Publish
        } else {
            Display::Screen(self.stack.current())
        }
    }

    /// Chrome visibility for the current state
    pub fn chrome_visible(&self) -> bool {
        is_chrome_visible(self.stack.current(), self.publish_open)
    }

    /// The full visit history, oldest first
    pub fn history(&self) -> &[Screen] {
        self.stack.entries()
    }
}

// =============================================================================
// Tests
// =============================================================================
