//! Chat room selection screen model.

use shiori_core::{domain::Room, errors::AppError, relay::Relay, CancelToken};

use crate::usecases::RoomListUsecase;

/// Headless model behind the room list: the signed-in profile's rooms,
/// newest first, plus an error relay for failed fetches.
pub struct ChatSelectScreen {
    usecase: RoomListUsecase,
    rooms: Relay<Vec<Room>>,
    error: Relay<Option<AppError>>,
    cancel: CancelToken,
}

impl ChatSelectScreen {
    /// Create the screen with an empty room list.
    pub fn new(usecase: RoomListUsecase) -> Self {
        Self {
            usecase,
            rooms: Relay::new(Vec::new()),
            error: Relay::new(None),
            cancel: CancelToken::new(),
        }
    }

    /// The fetched rooms, newest first.
    pub fn rooms(&self) -> &Relay<Vec<Room>> {
        &self.rooms
    }

    /// Most recent fetch failure, if any.
    pub fn error(&self) -> &Relay<Option<AppError>> {
        &self.error
    }

    /// Stop applying results; the next completion is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Fetch the signed-in profile's rooms and publish them.
    pub async fn fetch_rooms(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let outcome = self.usecase.fetch_rooms().await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(rooms) => self.rooms.set(rooms),
            Err(error) => {
                tracing::debug!(%error, "room list fetch failed");
                self.error.set(Some(error));
            }
        }
    }
}

impl Drop for ChatSelectScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
