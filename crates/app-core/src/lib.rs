//! Core login logic for the phone login flow
//!
//! This crate contains the phone number formatter and validator
//! together with the flow configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod phone;

pub use config::{ConfigError, LoginConfig};
pub use phone::{FormattedInput, PhoneInputError};
