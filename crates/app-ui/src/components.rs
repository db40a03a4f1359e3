//! Chrome component models for Tastebud
//!
//! Components are defined as Rust structs with serializable properties
//! that the frontend renders. This module covers the persistent chrome:
//! the bottom tab bar and the stacked-screen header.

use serde::{Deserialize, Serialize};

use crate::navigation::{NavRequest, Navigator, Screen};

// =============================================================================
// Tab Bar
// =============================================================================

/// Items in the persistent bottom tab bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Home feed tab
    #[default]
    Recommend,
    /// Explore tab
    Explore,
    /// Center publish button; opens the overlay instead of switching screens
    Publish,
    /// Messages tab
    Messages,
    /// Profile tab
    Profile,
}

impl Tab {
    /// Get all tabs in display order
    pub fn all() -> [Tab; 5] {
        [
            Tab::Recommend,
            Tab::Explore,
            Tab::Publish,
            Tab::Messages,
            Tab::Profile,
        ]
    }

    /// Get the label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Recommend => "推荐",
            Tab::Explore => "探索",
            Tab::Publish => "发布",
            Tab::Messages => "消息",
            Tab::Profile => "我的",
        }
    }

    /// Get the icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Recommend => "home",
            Tab::Explore => "search",
            Tab::Publish => "plus",
            Tab::Messages => "message-square",
            Tab::Profile => "user",
        }
    }

    /// The screen this tab highlights for, if it targets one.
    ///
    /// The publish button is an action, not a screen, so it is never
    /// highlighted.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Tab::Recommend => Some(Screen::Recommend),
            Tab::Explore => Some(Screen::Explore),
            Tab::Publish => None,
            Tab::Messages => Some(Screen::Messages),
            Tab::Profile => Some(Screen::Profile),
        }
    }

    /// The navigation request raised when this tab is pressed
    pub fn request(&self) -> NavRequest {
        match self.screen() {
            Some(screen) => NavRequest::Navigate {
                screen,
                payload: None,
            },
            None => NavRequest::OpenPublish,
        }
    }
}

/// Rendered state of one tab bar item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    /// Which tab this item is
    pub tab: Tab,
    /// Display label
    pub label: String,
    /// Icon name
    pub icon: String,
    /// Whether the current screen belongs to this tab
    pub active: bool,
}

/// The persistent bottom navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBar {
    /// Items left to right, publish button in the center
    pub items: Vec<TabItem>,
}

impl TabBar {
    /// Build the bar with `current` highlighted
    pub fn for_screen(current: Screen) -> Self {
        let items = Tab::all()
            .iter()
            .map(|tab| TabItem {
                tab: *tab,
                label: tab.label().to_string(),
                icon: tab.icon().to_string(),
                active: tab.screen() == Some(current),
            })
            .collect();
        Self { items }
    }

    /// Build the bar for the navigator's state, or `None` while chrome
    /// is hidden (publish overlay or a full-viewport screen).
    pub fn for_navigator(navigator: &Navigator) -> Option<Self> {
        if navigator.chrome_visible() {
            Some(Self::for_screen(navigator.current_screen()))
        } else {
            None
        }
    }
}

// =============================================================================
// Screen Header
// =============================================================================

/// Header shown on stacked (detail-style) screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenHeader {
    /// Header title, taken from the screen
    pub title: String,
    /// Whether the back affordance is shown
    pub show_back: bool,
}

impl ScreenHeader {
    /// Build the header for the navigator's current screen
    pub fn for_navigator(navigator: &Navigator) -> Self {
        Self {
            title: navigator.current_screen().title().to_string(),
            show_back: navigator.can_go_back(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_has_publish_in_center() {
        let tabs = Tab::all();
        assert_eq!(tabs[2], Tab::Publish);
        assert_eq!(tabs[0], Tab::Recommend);
        assert_eq!(tabs[4], Tab::Profile);
    }

    #[test]
    fn test_publish_tab_opens_overlay() {
        assert_eq!(Tab::Publish.request(), NavRequest::OpenPublish);
        assert_eq!(Tab::Publish.screen(), None);
    }

    #[test]
    fn test_screen_tabs_navigate() {
        assert_eq!(
            Tab::Messages.request(),
            NavRequest::Navigate {
                screen: Screen::Messages,
                payload: None,
            }
        );
    }

    #[test]
    fn test_tab_bar_marks_active_item() {
        let bar = TabBar::for_screen(Screen::Explore);
        let active: Vec<&TabItem> = bar.items.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab, Tab::Explore);
    }

    #[test]
    fn test_tab_bar_has_no_active_item_for_non_tab_screens() {
        // The AI kitchen and the what-to-eat picker belong to no tab
        let bar = TabBar::for_screen(Screen::AiKitchen);
        assert!(bar.items.iter().all(|item| !item.active));

        let bar = TabBar::for_screen(Screen::WhatToEat);
        assert!(bar.items.iter().all(|item| !item.active));
    }

    #[test]
    fn test_tab_bar_hidden_on_detail_screens() {
        let mut nav = Navigator::new();
        assert!(TabBar::for_navigator(&nav).is_some());

        nav.navigate(Screen::RecipeDetail, None);
        assert!(TabBar::for_navigator(&nav).is_none());
    }

    #[test]
    fn test_tab_bar_hidden_while_publishing() {
        let mut nav = Navigator::new();
        nav.open_publish();
        assert!(TabBar::for_navigator(&nav).is_none());
    }

    #[test]
    fn test_header_back_affordance_tracks_history() {
        let mut nav = Navigator::new();
        let header = ScreenHeader::for_navigator(&nav);
        assert_eq!(header.title, "推荐");
        assert!(!header.show_back);

        nav.navigate(Screen::WhatToEat, None);
        let header = ScreenHeader::for_navigator(&nav);
        assert_eq!(header.title, "今天吃什么");
        assert!(header.show_back);
    }
}
