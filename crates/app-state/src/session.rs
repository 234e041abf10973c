//! Session state for the phone login flow
//!
//! The session holds the phone number the user logged in with. One
//! [`SessionStore`] is created at the top of the flow; every screen
//! controller that needs the number gets a clone of the handle, so all of
//! them see the same session until logout clears it.

use app_core::phone::digit_count;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// The in-memory login session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Phone number as displayed when it was submitted; empty when logged out
    pub phone_number: String,
}

impl Session {
    /// Returns true when a phone number is set
    pub fn is_logged_in(&self) -> bool {
        !self.phone_number.is_empty()
    }
}

/// Shared handle to the login session
///
/// Cloning the handle does not copy the session. The watch channel holds
/// the only copy of the value, so readers and subscribers always agree.
///
/// # Example
///
/// ```
/// use app_state::session::SessionStore;
///
/// let store = SessionStore::new();
/// let home = store.clone();
///
/// store.set_phone("0912 345 678");
/// assert_eq!(home.phone_number(), "0912 345 678");
///
/// home.clear();
/// assert!(!store.is_logged_in());
/// ```
#[derive(Debug, Clone)]
pub struct SessionStore {
    session_tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty session
    pub fn new() -> Self {
        let (session_tx, _) = watch::channel(Session::default());
        Self {
            session_tx: Arc::new(session_tx),
        }
    }

    /// Stores the submitted phone number
    pub fn set_phone(&self, value: impl Into<String>) {
        let value = value.into();
        tracing::info!(digits = digit_count(&value), "Session phone number set");
        self.session_tx
            .send_modify(|session| session.phone_number = value);
    }

    /// Clears the session (logout)
    pub fn clear(&self) {
        tracing::info!("Session cleared");
        self.session_tx
            .send_modify(|session| session.phone_number.clear());
    }

    /// Returns the stored phone number, empty when logged out
    pub fn phone_number(&self) -> String {
        self.session_tx.borrow().phone_number.clone()
    }

    /// Returns true when a phone number is stored
    pub fn is_logged_in(&self) -> bool {
        self.session_tx.borrow().is_logged_in()
    }

    /// Returns a copy of the current session
    pub fn snapshot(&self) -> Session {
        self.session_tx.borrow().clone()
    }

    /// Subscribes to session changes
    ///
    /// The receiver always holds the latest session.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session_tx.subscribe()
    }
}
