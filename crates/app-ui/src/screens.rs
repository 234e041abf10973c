//! Screen controllers and view models
//!
//! Controllers hold per-screen state; views are the plain data the
//! presentation layer renders. Nothing here knows about layout or styling.

use app_core::phone::{self, PhoneInputError};
use app_core::LoginConfig;
use app_state::SessionStore;
use i18n::{Message, Translator};
use serde::{Deserialize, Serialize};

use crate::flow::Result;

// =============================================================================
// Phone Input
// =============================================================================

/// Draft state of the phone input screen
///
/// Private to the input screen; it is discarded whenever the flow leaves
/// the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneInputScreen {
    text: String,
    error: Option<PhoneInputError>,
    is_valid: bool,
}

impl PhoneInputScreen {
    /// Create an empty input screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a text change from the phone field
    ///
    /// Text past the field's maximum length is cut off before formatting.
    pub fn on_text_changed(&mut self, raw: &str, config: &LoginConfig) {
        let result = phone::process(config.clamp_input(raw), &config.valid_digit_counts);
        self.text = result.text;
        self.error = result.error;
        self.is_valid = result.is_valid;
    }

    /// Formatted text shown in the field
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Error raised by the latest text change
    pub fn error(&self) -> Option<PhoneInputError> {
        self.error
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid
    }

    /// Discard the draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the view model
    pub fn view(&self, translator: &Translator) -> Result<PhoneInputView> {
        let error_message = match self.error {
            Some(PhoneInputError::NonNumericInput) => {
                Some(translator.get(Message::ErrorNonNumeric)?)
            }
            None => None,
        };

        Ok(PhoneInputView {
            header: translator.get(Message::LoginHeader)?,
            subheader: translator.get(Message::LoginSubheader)?,
            description: translator.get(Message::LoginDescription)?,
            placeholder: translator.get(Message::LoginPlaceholder)?,
            text: self.text.clone(),
            error_message,
            submit_label: translator.get(Message::LoginContinue)?,
            submit_enabled: self.can_submit(),
        })
    }
}

/// Rendered state of the phone input screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneInputView {
    /// Screen header
    pub header: String,
    /// Sub-header above the description
    pub subheader: String,
    /// Explanatory text
    pub description: String,
    /// Field placeholder
    pub placeholder: String,
    /// Formatted field text
    pub text: String,
    /// Error shown under the field
    pub error_message: Option<String>,
    /// Submit button label
    pub submit_label: String,
    /// Whether the submit button is enabled
    pub submit_enabled: bool,
}

// =============================================================================
// Home
// =============================================================================

/// Home screen controller
#[derive(Debug, Clone)]
pub struct HomeScreen {
    session: SessionStore,
}

impl HomeScreen {
    /// Create a home screen reading from the shared session
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Build the view model
    pub fn view(&self, translator: &Translator) -> Result<HomeView> {
        let phone_number = self.session.phone_number();
        Ok(HomeView {
            title: translator.get(Message::HomeTitle)?,
            greeting: translator
                .get_with(Message::HomeGreeting, &[("phone", phone_number.as_str())])?,
            phone_number,
            details_label: translator.get(Message::HomeGoDetails)?,
            logout_label: translator.get(Message::HomeLogout)?,
        })
    }
}

/// Rendered state of the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    /// Screen heading
    pub title: String,
    /// Greeting including the phone number
    pub greeting: String,
    /// Phone number from the session
    pub phone_number: String,
    /// Label of the details button
    pub details_label: String,
    /// Label of the logout button
    pub logout_label: String,
}

// =============================================================================
// Details
// =============================================================================

/// Rendered state of the details screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsView {
    /// Screen heading
    pub title: String,
    /// Label of the back-to-home button
    pub back_label: String,
}

impl DetailsView {
    /// Build the view model
    pub fn new(translator: &Translator) -> Result<Self> {
        Ok(Self {
            title: translator.get(Message::DetailsTitle)?,
            back_label: translator.get(Message::DetailsBack)?,
        })
    }
}

// =============================================================================
// Logout Confirmation
// =============================================================================

/// Confirmation dialog shown before logout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDialog {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub message: String,
    /// Label of the cancel button
    pub cancel_label: String,
    /// Label of the destructive confirm button
    pub confirm_label: String,
    /// Whether tapping outside dismisses the dialog
    pub cancelable: bool,
}

impl ConfirmDialog {
    /// Build the logout confirmation
    pub fn logout(translator: &Translator) -> Result<Self> {
        Ok(Self {
            title: translator.get(Message::LogoutTitle)?,
            message: translator.get(Message::LogoutMessage)?,
            cancel_label: translator.get(Message::LogoutCancel)?,
            confirm_label: translator.get(Message::LogoutConfirm)?,
            cancelable: true,
        })
    }
}

/// View of whichever screen is on top
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum ScreenView {
    /// Phone input screen
    PhoneInput(PhoneInputView),
    /// Home screen
    Home(HomeView),
    /// Details screen
    Details(DetailsView),
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::Language;

    fn translator() -> Translator {
        Translator::new(Language::Vi).unwrap()
    }

    #[test]
    fn test_input_screen_formats_and_enables_submit() {
        let config = LoginConfig::default();
        let mut screen = PhoneInputScreen::new();
        assert!(!screen.can_submit());

        screen.on_text_changed("0912345678", &config);
        assert_eq!(screen.text(), "0912 345 678");
        assert!(screen.can_submit());
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn test_input_screen_error_clears_when_fixed() {
        let config = LoginConfig::default();
        let mut screen = PhoneInputScreen::new();

        screen.on_text_changed("0912a", &config);
        assert_eq!(screen.error(), Some(PhoneInputError::NonNumericInput));
        assert_eq!(screen.text(), "0912");

        screen.on_text_changed("0912", &config);
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn test_input_screen_respects_max_length() {
        let config = LoginConfig {
            max_input_length: 4,
            ..LoginConfig::default()
        };
        let mut screen = PhoneInputScreen::new();
        screen.on_text_changed("0912345678", &config);
        assert_eq!(screen.text(), "0912");
        assert!(!screen.can_submit());
    }

    #[test]
    fn test_input_view() {
        let config = LoginConfig::default();
        let mut screen = PhoneInputScreen::new();
        screen.on_text_changed("091x", &config);

        let view = screen.view(&translator()).unwrap();
        assert_eq!(view.text, "091");
        assert_eq!(view.error_message.as_deref(), Some("Vui lòng chỉ nhập số"));
        assert_eq!(view.placeholder, "Nhập số điện thoại của bạn");
        assert!(!view.submit_enabled);
    }

    #[test]
    fn test_input_reset() {
        let config = LoginConfig::default();
        let mut screen = PhoneInputScreen::new();
        screen.on_text_changed("0912345678", &config);
        screen.reset();
        assert_eq!(screen, PhoneInputScreen::default());
    }

    #[test]
    fn test_home_view_reads_session() {
        let session = SessionStore::new();
        session.set_phone("0912 345 678");

        let view = HomeScreen::new(session).view(&translator()).unwrap();
        assert_eq!(view.phone_number, "0912 345 678");
        assert_eq!(view.greeting, "Đăng nhập với số: 0912 345 678");
    }

    #[test]
    fn test_logout_dialog() {
        let dialog = ConfirmDialog::logout(&translator()).unwrap();
        assert_eq!(dialog.title, "Đăng Xuất");
        assert_eq!(dialog.message, "Bạn có chắc chắn muốn đăng xuất?");
        assert_eq!(dialog.cancel_label, "Hủy");
        assert!(dialog.cancelable);
    }

    #[test]
    fn test_details_view() {
        let view = DetailsView::new(&translator()).unwrap();
        assert_eq!(view.back_label, "Go Back to Home");
    }
}
