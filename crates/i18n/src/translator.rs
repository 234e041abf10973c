//! Fluent-backed message lookup

use crate::lang::Language;
use crate::{I18nError, Result};
use fluent::{FluentArgs, FluentBundle, FluentResource};

/// Message identifiers used by the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Title of the phone input screen
    ScreenPhoneInput,
    /// Title of the home screen
    ScreenHome,
    /// Title of the details screen
    ScreenDetails,
    /// Input screen header
    LoginHeader,
    /// Input screen sub-header
    LoginSubheader,
    /// Input screen description
    LoginDescription,
    /// Phone field placeholder
    LoginPlaceholder,
    /// Submit button label
    LoginContinue,
    /// Non-numeric input error
    ErrorNonNumeric,
    /// Home screen heading
    HomeTitle,
    /// Home greeting, takes `phone`
    HomeGreeting,
    /// Button opening the details screen
    HomeGoDetails,
    /// Logout button label
    HomeLogout,
    /// Details screen heading
    DetailsTitle,
    /// Button returning home
    DetailsBack,
    /// Logout dialog title
    LogoutTitle,
    /// Logout dialog body
    LogoutMessage,
    /// Logout dialog cancel label
    LogoutCancel,
    /// Logout dialog confirm label
    LogoutConfirm,
}

impl Message {
    /// Fluent message id
    pub fn id(&self) -> &'static str {
        match self {
            Message::ScreenPhoneInput => "screen-phone-input",
            Message::ScreenHome => "screen-home",
            Message::ScreenDetails => "screen-details",
            Message::LoginHeader => "login-header",
            Message::LoginSubheader => "login-subheader",
            Message::LoginDescription => "login-description",
            Message::LoginPlaceholder => "login-placeholder",
            Message::LoginContinue => "login-continue",
            Message::ErrorNonNumeric => "error-non-numeric",
            Message::HomeTitle => "home-title",
            Message::HomeGreeting => "home-greeting",
            Message::HomeGoDetails => "home-go-details",
            Message::HomeLogout => "home-logout",
            Message::DetailsTitle => "details-title",
            Message::DetailsBack => "details-back",
            Message::LogoutTitle => "logout-title",
            Message::LogoutMessage => "logout-message",
            Message::LogoutCancel => "logout-cancel",
            Message::LogoutConfirm => "logout-confirm",
        }
    }
}

/// Translator for one language
///
/// # Example
///
/// ```
/// use i18n::{Language, Message, Translator};
///
/// let translator = Translator::new(Language::Vi).unwrap();
/// assert_eq!(translator.get(Message::ErrorNonNumeric).unwrap(), "Vui lòng chỉ nhập số");
/// ```
pub struct Translator {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Loads the bundled resource for a language
    pub fn new(language: Language) -> Result<Self> {
        let resource = FluentResource::try_new(language.source().to_string()).map_err(
            |(_, errors)| I18nError::Parse {
                language: language.tag(),
                details: format!("{:?}", errors),
            },
        )?;

        let mut bundle = FluentBundle::new(vec![language.langid()]);
        // plain text output, no bidi isolation marks around arguments
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| I18nError::Parse {
            language: language.tag(),
            details: format!("{:?}", errors),
        })?;

        tracing::debug!(language = %language, "Loaded translations");

        Ok(Self { language, bundle })
    }

    /// Negotiates a language from a tag and loads it
    pub fn for_tag(tag: &str) -> Result<Self> {
        Self::new(Language::negotiate(tag)?)
    }

    /// Active language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Formats a message without arguments
    pub fn get(&self, message: Message) -> Result<String> {
        self.format(message, None)
    }

    /// Formats a message with string arguments
    pub fn get_with(&self, message: Message, args: &[(&str, &str)]) -> Result<String> {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(message, Some(&fluent_args))
    }

    fn format(&self, message: Message, args: Option<&FluentArgs>) -> Result<String> {
        let id = message.id();
        let pattern = self
            .bundle
            .get_message(id)
            .and_then(|msg| msg.value())
            .ok_or(I18nError::MissingMessage(id))?;

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            return Err(I18nError::Format {
                id,
                details: format!("{:?}", errors),
            });
        }

        Ok(value.into_owned())
    }
}
