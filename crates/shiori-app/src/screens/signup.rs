//! Signup screen model.

use shiori_core::{
    domain::User,
    errors::AppError,
    relay::{LoadingRelay, Relay},
    validate::{
        all_valid, EmailValidator, FieldValidation, NickNameValidator,
        PasswordConfirmationValidator, PasswordValidator,
    },
    CancelToken,
};

use crate::usecases::SignupUsecase;

/// Headless model behind the signup form: display name, email, password
/// with confirmation, and an optional avatar image.
pub struct SignupScreen {
    name: String,
    email: String,
    password: String,
    confirmation: String,
    icon: Option<Vec<u8>>,
    state: LoadingRelay<User, AppError>,
    can_submit: Relay<bool>,
    usecase: SignupUsecase,
    cancel: CancelToken,
}

impl SignupScreen {
    /// Create the screen in standby with empty fields.
    pub fn new(usecase: SignupUsecase) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirmation: String::new(),
            icon: None,
            state: LoadingRelay::standby(),
            can_submit: Relay::new(false),
            usecase,
            cancel: CancelToken::new(),
        }
    }

    /// Update the display name input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.refresh_submit();
    }

    /// Update the email input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.refresh_submit();
    }

    /// Update the password input.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.refresh_submit();
    }

    /// Update the password confirmation input.
    pub fn set_confirmation(&mut self, confirmation: impl Into<String>) {
        self.confirmation = confirmation.into();
        self.refresh_submit();
    }

    /// Attach or clear the avatar image payload. Not validated; the icon
    /// is optional.
    pub fn set_icon(&mut self, icon: Option<Vec<u8>>) {
        self.icon = icon;
    }

    /// Validation of the current display name input.
    pub fn name_validation(&self) -> FieldValidation {
        NickNameValidator::validate(&self.name)
    }

    /// Validation of the current email input.
    pub fn email_validation(&self) -> FieldValidation {
        EmailValidator::validate(&self.email)
    }

    /// Validation of the current password input.
    pub fn password_validation(&self) -> FieldValidation {
        PasswordValidator::validate(&self.password)
    }

    /// Validation of the password confirmation against the password.
    pub fn confirmation_validation(&self) -> FieldValidation {
        PasswordConfirmationValidator::validate(&self.password, &self.confirmation)
    }

    /// Lifecycle of the signup operation.
    pub fn state(&self) -> &LoadingRelay<User, AppError> {
        &self.state
    }

    /// True iff every tracked field is currently valid.
    pub fn can_submit(&self) -> &Relay<bool> {
        &self.can_submit
    }

    /// Stop applying results; the next completion is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Run the signup usecase and publish its outcome.
    pub async fn submit(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.set_loading();

        let outcome = self
            .usecase
            .signup(&self.email, &self.password, &self.name, self.icon.clone())
            .await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(user) => self.state.set_done(user),
            Err(error) => {
                tracing::debug!(%error, "signup failed");
                self.state.set_failed(error);
            }
        }
    }

    fn refresh_submit(&self) {
        self.can_submit.set(all_valid(&[
            &self.name_validation(),
            &self.email_validation(),
            &self.password_validation(),
            &self.confirmation_validation(),
        ]));
    }
}

impl Drop for SignupScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
