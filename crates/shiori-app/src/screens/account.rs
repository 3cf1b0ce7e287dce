//! Account screen model.

use shiori_core::{domain::User, errors::AppError, relay::LoadingRelay, CancelToken};

use crate::usecases::LogoutUsecase;

/// Headless model behind the account screen: shows the signed-in user
/// and drives logout.
pub struct AccountScreen {
    user: User,
    usecase: LogoutUsecase,
    state: LoadingRelay<(), AppError>,
    cancel: CancelToken,
}

impl AccountScreen {
    /// Create the screen for the signed-in `user`.
    pub fn new(user: User, usecase: LogoutUsecase) -> Self {
        Self {
            user,
            usecase,
            state: LoadingRelay::standby(),
            cancel: CancelToken::new(),
        }
    }

    /// The signed-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Lifecycle of the logout operation.
    pub fn state(&self) -> &LoadingRelay<(), AppError> {
        &self.state
    }

    /// Stop applying results; the next completion is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Run the logout usecase and publish its outcome. On failure the
    /// stored token is untouched and the session stays signed in.
    pub async fn logout(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.set_loading();

        let outcome = self.usecase.logout().await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(()) => self.state.set_done(()),
            Err(error) => {
                tracing::debug!(%error, "logout failed");
                self.state.set_failed(error);
            }
        }
    }
}

impl Drop for AccountScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
