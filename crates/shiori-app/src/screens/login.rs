//! Login screen model.
//!
//! Holds the email and password inputs, exposes their validation, and
//! drives the login lifecycle through a loading-state relay. Frontends
//! bind the relay to an indicator and the `can_submit` relay to the
//! submit control.

use shiori_core::{
    domain::User,
    errors::AppError,
    relay::{LoadingRelay, Relay},
    validate::{all_valid, EmailValidator, FieldValidation, PasswordValidator},
    CancelToken,
};

use crate::usecases::LoginUsecase;

/// Headless model behind the login form.
pub struct LoginScreen {
    email: String,
    password: String,
    state: LoadingRelay<User, AppError>,
    can_submit: Relay<bool>,
    usecase: LoginUsecase,
    cancel: CancelToken,
}

impl LoginScreen {
    /// Create the screen in standby with empty fields.
    pub fn new(usecase: LoginUsecase) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            state: LoadingRelay::standby(),
            can_submit: Relay::new(false),
            usecase,
            cancel: CancelToken::new(),
        }
    }

    /// Update the email input and re-derive submit enablement.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.refresh_submit();
    }

    /// Update the password input and re-derive submit enablement.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.refresh_submit();
    }

    /// Validation of the current email input.
    pub fn email_validation(&self) -> FieldValidation {
        EmailValidator::validate(&self.email)
    }

    /// Validation of the current password input.
    pub fn password_validation(&self) -> FieldValidation {
        PasswordValidator::validate(&self.password)
    }

    /// Lifecycle of the login operation.
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

    /// Run the login usecase and publish its outcome.
    pub async fn submit(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.set_loading();

        let outcome = self.usecase.login(&self.email, &self.password).await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(user) => self.state.set_done(user),
            Err(error) => {
                tracing::debug!(%error, "login failed");
                self.state.set_failed(error);
            }
        }
    }

    fn refresh_submit(&self) {
        self.can_submit.set(all_valid(&[
            &self.email_validation(),
            &self.password_validation(),
        ]));
    }
}

impl Drop for LoginScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
