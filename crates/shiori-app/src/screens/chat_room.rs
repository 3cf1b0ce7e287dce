//! Chat room screen model.
//!
//! `start_listening` wires the backend subscription into the message
//! relay: it subscribes first, then loads the history, so nothing sent
//! in between is lost. Live events are deduplicated by message id
//! against the held list, which also absorbs the echo of our own sends.

use tokio::task::JoinHandle;

use shiori_core::{
    domain::{ChatMessage, Room},
    effects::MessageEvent,
    errors::AppError,
    relay::{LoadingRelay, Relay},
    types::ProfileId,
    CancelToken,
};

use crate::usecases::ChatRoomUsecase;

/// Headless model behind one chat room.
pub struct ChatRoomScreen {
    room: Room,
    me: ProfileId,
    usecase: ChatRoomUsecase,
    messages: Relay<Vec<ChatMessage>>,
    send_state: LoadingRelay<ChatMessage, AppError>,
    error: Relay<Option<AppError>>,
    listener: Option<JoinHandle<()>>,
    cancel: CancelToken,
}

impl ChatRoomScreen {
    /// Create the screen for `room`, viewed as `me`. No history is
    /// loaded until `start_listening`.
    pub fn new(room: Room, me: ProfileId, usecase: ChatRoomUsecase) -> Self {
        Self {
            room,
            me,
            usecase,
            messages: Relay::new(Vec::new()),
            send_state: LoadingRelay::standby(),
            error: Relay::new(None),
            listener: None,
            cancel: CancelToken::new(),
        }
    }

    /// The room this screen shows.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The viewing profile, for my-message styling.
    pub fn me(&self) -> ProfileId {
        self.me
    }

    /// Messages in the room, oldest first.
    pub fn messages(&self) -> &Relay<Vec<ChatMessage>> {
        &self.messages
    }

    /// Lifecycle of the most recent send; `Done` carries the message as
    /// sent.
    pub fn send_state(&self) -> &LoadingRelay<ChatMessage, AppError> {
        &self.send_state
    }

    /// Most recent listener or history failure, if any.
    pub fn error(&self) -> &Relay<Option<AppError>> {
        &self.error
    }

    /// Stop applying results and stop the listener.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Subscribe to the room, load the history, and start appending live
    /// messages to the message relay. Idempotent while a listener runs.
    pub async fn start_listening(&mut self) {
        if self.listener.is_some() || self.cancel.is_cancelled() {
            return;
        }
        let subscription = match self.usecase.subscribe(self.room.id).await {
            Ok(subscription) => subscription,
            Err(error) => {
                self.error.set(Some(error));
                return;
            }
        };
        let history = match self.usecase.fetch_messages(self.room.id).await {
            Ok(history) => history,
            Err(error) => {
                self.error.set(Some(error));
                return;
            }
        };
        if self.cancel.is_cancelled() {
            return;
        }
        self.messages.set(history);

        let messages = self.messages.clone();
        let cancel = self.cancel.clone();
        self.listener = Some(tokio::spawn(async move {
            let mut subscription = subscription;
            while let Some(MessageEvent::Added(message)) = subscription.recv().await {
                if cancel.is_cancelled() {
                    break;
                }
                messages.update(|mut list| {
                    if !list.iter().any(|existing| existing.id == message.id) {
                        list.push(message);
                    }
                    list
                });
            }
        }));
    }

    /// Stop the listener. Messages already applied stay on the relay.
    pub fn stop_listening(&mut self) {
        if let Some(handle) = self.listener.take() {
            handle.abort();
        }
    }

    /// Send `text` into the room. Blank input is ignored. The sent
    /// message reaches the message relay through the listener echo, not
    /// from here.
    pub async fn send(&self, text: &str) {
        if text.trim().is_empty() || self.cancel.is_cancelled() {
            return;
        }
        let sender = match self.room.members.iter().find(|member| member.id == self.me) {
            Some(profile) => profile.clone(),
            None => {
                self.send_state
                    .set_failed(AppError::chat("sender is not a member of this room"));
                return;
            }
        };
        self.send_state.set_loading();

        let outcome = self.usecase.send_message(self.room.id, &sender, text).await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(message) => self.send_state.set_done(message),
            Err(error) => {
                tracing::debug!(%error, "send failed");
                self.send_state.set_failed(error);
            }
        }
    }
}

impl Drop for ChatRoomScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.listener.take() {
            handle.abort();
        }
    }
}
