//! Screen flow for the phone login app
//!
//! This crate provides the UI-facing layer: routes, the navigation
//! stack, screen view models, and the event-driven flow that ties the
//! phone input, home, and details screens together.
//!
//! # Modules
//!
//! - [`navigation`] - Routes and the stack navigator
//! - [`screens`] - Screen controllers and view models
//! - [`flow`] - The flow state machine and its events
//!
//! # Example
//!
//! ```rust
//! use app_core::LoginConfig;
//! use app_ui::{FlowEvent, FlowOutcome, Route, ScreenFlow};
//!
//! let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();
//! flow.dispatch(FlowEvent::TextChanged("84912345678".into())).unwrap();
//! flow.dispatch(FlowEvent::SubmitPressed).unwrap();
//!
//! // Logout asks first
//! let outcome = flow.dispatch(FlowEvent::LogoutPressed).unwrap();
//! assert!(matches!(outcome, FlowOutcome::Prompt(_)));
//!
//! flow.dispatch(FlowEvent::ConfirmLogout).unwrap();
//! assert_eq!(flow.current_route(), Route::PhoneInput);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod flow;
pub mod navigation;
pub mod screens;

pub use flow::{FlowError, FlowEvent, FlowOutcome, IgnoreReason, ScreenFlow};

pub use navigation::{NavigationAnimation, NavigationStack, Route, StackEntry, Transition};

pub use screens::{
    ConfirmDialog, DetailsView, HomeScreen, HomeView, PhoneInputScreen, PhoneInputView,
    ScreenView,
};
