//! Phone login flow
//!
//! Facade over the workspace crates: the phone formatter and config
//! (`app-core`), the shared session (`app-state`), the screen flow
//! (`app-ui`), and translations (`i18n`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core::{config, phone, ConfigError, LoginConfig, PhoneInputError};
pub use app_state::{Session, SessionStore};
pub use app_ui::{
    FlowError, FlowEvent, FlowOutcome, IgnoreReason, Route, ScreenFlow, ScreenView, Transition,
};
pub use i18n::{Language, Message, Translator};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
/// Calling it more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
