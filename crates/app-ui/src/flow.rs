//! Screen flow state machine
//!
//! [`ScreenFlow`] owns the navigation stack, the input screen draft and the
//! pending logout prompt, and holds a handle to the shared session. The
//! presentation layer feeds it one [`FlowEvent`] at a time through
//! [`ScreenFlow::dispatch`] and renders the result.
//!
//! ```text
//! PhoneInput --submit (valid)--> Home <--> Details
//!     ^                           |
//!     +---- logout (confirmed) ---+
//! ```

use app_core::{ConfigError, LoginConfig};
use app_state::SessionStore;
use i18n::{I18nError, Translator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::{NavigationStack, Route, Transition};
use crate::screens::{ConfirmDialog, DetailsView, HomeScreen, PhoneInputScreen, ScreenView};

/// Screen flow errors
#[derive(Debug, Error)]
pub enum FlowError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Localization error
    #[error("Localization error: {0}")]
    I18n(#[from] I18nError),
}

/// Result type for screen flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// User actions delivered by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FlowEvent {
    /// The phone field text changed
    TextChanged(String),
    /// The continue button was pressed
    SubmitPressed,
    /// The details button on home was pressed
    OpenDetails,
    /// The back-to-home button on details was pressed
    BackToHome,
    /// The header or hardware back action
    Back,
    /// The logout button on home was pressed
    LogoutPressed,
    /// The logout prompt was confirmed
    ConfirmLogout,
    /// The logout prompt was dismissed
    CancelLogout,
}

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// The event belongs to another screen
    WrongScreen {
        /// Screen the event is meant for
        expected: Route,
        /// Screen currently on top
        current: Route,
    },
    /// Submit pressed while the number is incomplete
    SubmitDisabled,
    /// No transition is defined for back on this screen
    NoBackTransition,
    /// A confirmation dialog is waiting for an answer
    DialogOpen,
    /// Confirm or cancel arrived without a dialog
    NoPendingDialog,
}

/// Result of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FlowOutcome {
    /// State of the current screen changed
    Updated,
    /// The flow moved to another screen
    Navigated(Transition),
    /// A confirmation dialog must be shown
    Prompt(ConfirmDialog),
    /// The pending dialog was dismissed without effect
    Dismissed,
    /// The event was rejected
    Ignored {
        /// Why nothing happened
        reason: IgnoreReason,
    },
}

impl FlowOutcome {
    fn ignored(reason: IgnoreReason) -> Self {
        tracing::debug!(?reason, "Flow event ignored");
        FlowOutcome::Ignored { reason }
    }

    /// Whether the event changed anything
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlowOutcome::Ignored { .. })
    }
}

/// The phone login screen flow
///
/// # Example
///
/// ```
/// use app_core::LoginConfig;
/// use app_ui::flow::{FlowEvent, ScreenFlow};
/// use app_ui::navigation::Route;
///
/// let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();
/// flow.dispatch(FlowEvent::TextChanged("0912345678".to_string())).unwrap();
/// flow.dispatch(FlowEvent::SubmitPressed).unwrap();
///
/// assert_eq!(flow.current_route(), Route::Home);
/// assert_eq!(flow.session().phone_number(), "0912 345 678");
/// ```
#[derive(Debug)]
pub struct ScreenFlow {
    config: LoginConfig,
    translator: Translator,
    session: SessionStore,
    stack: NavigationStack,
    input: PhoneInputScreen,
    pending_dialog: Option<ConfirmDialog>,
}

impl ScreenFlow {
    /// Create a flow with a fresh session
    pub fn new(config: LoginConfig) -> Result<Self> {
        Self::with_session(config, SessionStore::new())
    }

    /// Create a flow around an existing session handle
    pub fn with_session(config: LoginConfig, session: SessionStore) -> Result<Self> {
        config.validate()?;
        let translator = Translator::for_tag(&config.language)?;

        tracing::info!(language = %translator.language(), "Screen flow started");

        Ok(Self {
            config,
            translator,
            session,
            stack: NavigationStack::new(Route::PhoneInput),
            input: PhoneInputScreen::new(),
            pending_dialog: None,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Translator for the configured language
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Shared session handle
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Navigation stack
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Screen on top of the stack
    pub fn current_route(&self) -> Route {
        self.stack.current()
    }

    /// Input screen draft
    pub fn input(&self) -> &PhoneInputScreen {
        &self.input
    }

    /// Logout prompt waiting for an answer
    pub fn pending_dialog(&self) -> Option<&ConfirmDialog> {
        self.pending_dialog.as_ref()
    }

    /// Localized header title of the current screen
    pub fn title(&self) -> Result<String> {
        Ok(self.translator.get(self.current_route().title())?)
    }

    /// View model of the current screen
    pub fn view(&self) -> Result<ScreenView> {
        Ok(match self.current_route() {
            Route::PhoneInput => ScreenView::PhoneInput(self.input.view(&self.translator)?),
            Route::Home => {
                ScreenView::Home(HomeScreen::new(self.session.clone()).view(&self.translator)?)
            }
            Route::Details => ScreenView::Details(DetailsView::new(&self.translator)?),
        })
    }

    /// Handle one user action
    pub fn dispatch(&mut self, event: FlowEvent) -> Result<FlowOutcome> {
        let current = self.current_route();

        if self.pending_dialog.is_some()
            && !matches!(event, FlowEvent::ConfirmLogout | FlowEvent::CancelLogout)
        {
            return Ok(FlowOutcome::ignored(IgnoreReason::DialogOpen));
        }

        let outcome = match event {
            FlowEvent::TextChanged(text) => {
                if current != Route::PhoneInput {
                    return Ok(wrong_screen(Route::PhoneInput, current));
                }
                self.input.on_text_changed(&text, &self.config);
                FlowOutcome::Updated
            }
            FlowEvent::SubmitPressed => {
                if current != Route::PhoneInput {
                    return Ok(wrong_screen(Route::PhoneInput, current));
                }
                self.submit()
            }
            FlowEvent::OpenDetails => {
                if current != Route::Home {
                    return Ok(wrong_screen(Route::Home, current));
                }
                self.navigate(Route::Details)
            }
            FlowEvent::BackToHome => {
                if current != Route::Details {
                    return Ok(wrong_screen(Route::Details, current));
                }
                self.navigate(Route::Home)
            }
            FlowEvent::Back => match current {
                Route::Details => self.navigate(Route::Home),
                _ => FlowOutcome::ignored(IgnoreReason::NoBackTransition),
            },
            FlowEvent::LogoutPressed => {
                if current != Route::Home {
                    return Ok(wrong_screen(Route::Home, current));
                }
                self.request_logout()?
            }
            FlowEvent::ConfirmLogout => match self.pending_dialog.take() {
                Some(_) => self.logout(),
                None => FlowOutcome::ignored(IgnoreReason::NoPendingDialog),
            },
            FlowEvent::CancelLogout => match self.pending_dialog.take() {
                Some(_) => {
                    tracing::debug!("Logout cancelled");
                    FlowOutcome::Dismissed
                }
                None => FlowOutcome::ignored(IgnoreReason::NoPendingDialog),
            },
        };

        Ok(outcome)
    }

    fn submit(&mut self) -> FlowOutcome {
        if !self.input.can_submit() {
            return FlowOutcome::ignored(IgnoreReason::SubmitDisabled);
        }

        self.session.set_phone(self.input.text());
        // the draft belongs to the input screen and does not outlive it
        self.input.reset();
        self.navigate(Route::Home)
    }

    fn request_logout(&mut self) -> Result<FlowOutcome> {
        let dialog = ConfirmDialog::logout(&self.translator)?;
        self.pending_dialog = Some(dialog.clone());
        Ok(FlowOutcome::Prompt(dialog))
    }

    fn logout(&mut self) -> FlowOutcome {
        self.session.clear();
        self.input.reset();
        self.navigate(Route::PhoneInput)
    }

    fn navigate(&mut self, route: Route) -> FlowOutcome {
        match self.stack.navigate(route) {
            Some(transition) => {
                tracing::info!(
                    from = transition.from.to_path(),
                    to = transition.to.to_path(),
                    "Navigated"
                );
                FlowOutcome::Navigated(transition)
            }
            None => FlowOutcome::Updated,
        }
    }
}

fn wrong_screen(expected: Route, current: Route) -> FlowOutcome {
    FlowOutcome::ignored(IgnoreReason::WrongScreen { expected, current })
}
