//! Field validation for form screens.
//!
//! Validators are pure functions from input text to a tri-state result.
//! Untouched (empty) input is `NotValidated` so forms can suppress error
//! labels until the user has typed something; submit buttons still stay
//! disabled because `NotValidated` is not `Valid`.

use chrono::NaiveDate;

/// Outcome of validating one input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValidation {
    /// The field is empty and has not been judged yet.
    #[default]
    NotValidated,
    /// The field passed.
    Valid,
    /// The field failed, with a message to show next to it.
    Invalid {
        /// Message describing what to fix.
        message: String,
    },
}

impl FieldValidation {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// True only when the field passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error message, when invalid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

/// True when every field in `fields` is `Valid`.
///
/// Drives submit-button enablement: a form submits only while all of its
/// tracked fields are simultaneously valid.
#[must_use]
pub fn all_valid(fields: &[&FieldValidation]) -> bool {
    fields.iter().all(|field| field.is_valid())
}

/// Syntactic email check.
pub struct EmailValidator;

impl EmailValidator {
    /// Validate an email address: one `@`, a non-empty local part, and a
    /// dot-separated domain with non-empty labels. No whitespace.
    pub fn validate(input: &str) -> FieldValidation {
        if input.is_empty() {
            return FieldValidation::NotValidated;
        }
        if input.chars().any(char::is_whitespace) {
            return FieldValidation::invalid("email must not contain spaces");
        }
        let mut parts = input.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let Some(domain) = parts.next() else {
            return FieldValidation::invalid("enter a valid email address");
        };
        let domain_ok = domain.contains('.')
            && domain.split('.').all(|label| !label.is_empty())
            && !domain.contains('@');
        if local.is_empty() || !domain_ok {
            return FieldValidation::invalid("enter a valid email address");
        }
        FieldValidation::Valid
    }
}

/// Password strength check.
pub struct PasswordValidator;

impl PasswordValidator {
    /// Minimum length of a password.
    pub const MIN_LENGTH: usize = 6;

    /// Validate a password: at least [`Self::MIN_LENGTH`] characters, no
    /// whitespace.
    pub fn validate(input: &str) -> FieldValidation {
        if input.is_empty() {
            return FieldValidation::NotValidated;
        }
        if input.chars().any(char::is_whitespace) {
            return FieldValidation::invalid("password must not contain spaces");
        }
        if input.chars().count() < Self::MIN_LENGTH {
            return FieldValidation::invalid(format!(
                "password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }
        FieldValidation::Valid
    }
}

/// Equality check for the password confirmation field.
pub struct PasswordConfirmationValidator;

impl PasswordConfirmationValidator {
    /// Validate that `confirmation` matches `password`.
    pub fn validate(password: &str, confirmation: &str) -> FieldValidation {
        if confirmation.is_empty() {
            return FieldValidation::NotValidated;
        }
        if password != confirmation {
            return FieldValidation::invalid("passwords do not match");
        }
        FieldValidation::Valid
    }
}

/// Display-name check for signup.
pub struct NickNameValidator;

impl NickNameValidator {
    /// Maximum length of a display name.
    pub const MAX_LENGTH: usize = 20;

    /// Validate a display name: non-blank, at most
    /// [`Self::MAX_LENGTH`] characters.
    pub fn validate(input: &str) -> FieldValidation {
        if input.is_empty() {
            return FieldValidation::NotValidated;
        }
        if input.trim().is_empty() {
            return FieldValidation::invalid("name must not be blank");
        }
        if input.chars().count() > Self::MAX_LENGTH {
            return FieldValidation::invalid(format!(
                "name must be at most {} characters",
                Self::MAX_LENGTH
            ));
        }
        FieldValidation::Valid
    }
}

/// Book title check.
pub struct TitleValidator;

impl TitleValidator {
    /// Maximum length of a book title.
    pub const MAX_LENGTH: usize = 80;

    /// Validate a book title: non-blank, at most
    /// [`Self::MAX_LENGTH`] characters.
    pub fn validate(input: &str) -> FieldValidation {
        if input.is_empty() {
            return FieldValidation::NotValidated;
        }
        if input.trim().is_empty() {
            return FieldValidation::invalid("title must not be blank");
        }
        if input.chars().count() > Self::MAX_LENGTH {
            return FieldValidation::invalid(format!(
                "title must be at most {} characters",
                Self::MAX_LENGTH
            ));
        }
        FieldValidation::Valid
    }
}

/// Price field check.
pub struct NumberValidator;

impl NumberValidator {
    /// Validate a price: decimal digits parsing to a non-negative integer.
    pub fn validate(input: &str) -> FieldValidation {
        if input.is_empty() {
            return FieldValidation::NotValidated;
        }
        if !input.chars().all(|c| c.is_ascii_digit()) || input.parse::<i64>().is_err() {
            return FieldValidation::invalid("price must be a number");
        }
        FieldValidation::Valid
    }

    /// Parse an already validated price field.
    pub fn parse(input: &str) -> Option<i64> {
        match Self::validate(input) {
            FieldValidation::Valid => input.parse().ok(),
            _ => None,
        }
    }
}

/// Purchase-date field check.
pub struct PurchaseDateValidator;

impl PurchaseDateValidator {
    /// Accepted date format.
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Validate a purchase date in `YYYY-MM-DD` form.
    pub fn validate(input: &str) -> FieldValidation {
        if input.is_empty() {
            return FieldValidation::NotValidated;
        }
        match NaiveDate::parse_from_str(input, Self::FORMAT) {
            Ok(_) => FieldValidation::Valid,
            Err(_) => FieldValidation::invalid("date must be in YYYY-MM-DD form"),
        }
    }

    /// Parse an already validated purchase date.
    pub fn parse(input: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(input, Self::FORMAT).ok()
    }
}
