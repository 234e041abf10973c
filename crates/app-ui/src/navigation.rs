//! Navigation for the phone login flow
//!
//! This module provides:
//! - Route definitions with stable paths
//! - A stack navigator with the semantics of a native stack
//! - Transition descriptions for the presentation layer

use i18n::Message;
use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    /// Phone number entry (initial screen)
    #[default]
    PhoneInput,
    /// Home screen shown after login
    Home,
    /// Details screen reached from home
    Details,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::PhoneInput => "/login",
            Route::Home => "/home",
            Route::Details => "/details",
        }
    }

    /// Message holding the header title for this route
    pub fn title(&self) -> Message {
        match self {
            Route::PhoneInput => Message::ScreenPhoneInput,
            Route::Home => Message::ScreenHome,
            Route::Details => Message::ScreenDetails,
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
}

/// A completed move between two routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Route before the move
    pub from: Route,
    /// Route after the move
    pub to: Route,
    /// Animation to play
    pub animation: NavigationAnimation,
}

/// Stack navigator
///
/// Never empty: the bottom entry is the root route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Navigate to a route
    ///
    /// If the route is already on the stack, everything above it is popped;
    /// otherwise the route is pushed. Navigating to the current route does
    /// nothing and returns `None`.
    pub fn navigate(&mut self, route: Route) -> Option<Transition> {
        let from = self.current();
        if from == route {
            return None;
        }

        let animation = match self.entries.iter().position(|e| e.route == route) {
            Some(idx) => {
                self.entries.truncate(idx + 1);
                NavigationAnimation::Pop
            }
            None => {
                self.entries.push(StackEntry::new(route));
                NavigationAnimation::Push
            }
        };

        Some(Transition {
            from,
            to: route,
            animation,
        })
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        // the stack is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// Tests
// =============================================================================
