//! Shiori App - Headless Application Core
//!
//! Usecases and screen models for the book catalog and chat client,
//! with no rendering attached. A frontend owns the screen models, feeds
//! them input, and binds their relays; everything below the relays runs
//! here.
//!
//! Layering: screens drive usecases, usecases drive the API client and
//! the effect traits. Capabilities are injected at construction all the
//! way down; the crate holds no ambient state.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Headless screen models.
pub mod screens;

/// One usecase per user intent.
pub mod usecases;

// === Public API Re-exports ===

pub use screens::{
    AccountScreen, BookFormScreen, BookListScreen, ChatRoomScreen, ChatSelectScreen,
    ChatUserListScreen, LoginScreen, SignupScreen, WishListScreen,
};
pub use usecases::{
    AddBookUsecase, BookListUsecase, BookPage, ChatRoomUsecase, EditBookUsecase, LoginUsecase,
    LogoutUsecase, RoomListUsecase, SignupUsecase, UserListUsecase,
};
