//! Chat partner selection screen model.

use shiori_core::{
    domain::{Profile, Room},
    errors::AppError,
    relay::{LoadingRelay, Relay},
    types::ProfileId,
    CancelToken,
};

use crate::usecases::{RoomListUsecase, UserListUsecase};

/// Headless model behind the profile directory. Picking a partner opens
/// a room with them; the created room arrives through the `selection`
/// relay so the frontend can navigate into it.
pub struct ChatUserListScreen {
    users: UserListUsecase,
    rooms: RoomListUsecase,
    profiles: Relay<Vec<Profile>>,
    error: Relay<Option<AppError>>,
    selection: LoadingRelay<Room, AppError>,
    cancel: CancelToken,
}

impl ChatUserListScreen {
    /// Create the screen with an empty directory.
    pub fn new(users: UserListUsecase, rooms: RoomListUsecase) -> Self {
        Self {
            users,
            rooms,
            profiles: Relay::new(Vec::new()),
            error: Relay::new(None),
            selection: LoadingRelay::standby(),
            cancel: CancelToken::new(),
        }
    }

    /// Every chat profile except the signed-in one.
    pub fn profiles(&self) -> &Relay<Vec<Profile>> {
        &self.profiles
    }

    /// Most recent directory fetch failure, if any.
    pub fn error(&self) -> &Relay<Option<AppError>> {
        &self.error
    }

    /// Lifecycle of the room opening; `Done` carries the room to enter.
    pub fn selection(&self) -> &LoadingRelay<Room, AppError> {
        &self.selection
    }

    /// Stop applying results; the next completion is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Fetch the profile directory and publish it.
    pub async fn fetch_users(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let outcome = self.users.fetch_users().await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(profiles) => self.profiles.set(profiles),
            Err(error) => {
                tracing::debug!(%error, "user list fetch failed");
                self.error.set(Some(error));
            }
        }
    }

    /// Open a room with `partner` and publish it through `selection`.
    pub async fn select_partner(&self, partner: ProfileId) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.selection.set_loading();

        let outcome = self.rooms.create_room(partner).await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(room) => self.selection.set_done(room),
            Err(error) => {
                tracing::debug!(%error, "room create failed");
                self.selection.set_failed(error);
            }
        }
    }
}

impl Drop for ChatUserListScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
