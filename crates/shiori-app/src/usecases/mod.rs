//! One usecase struct per user intent.
//!
//! Usecases own the full side-effect sequence behind one intent and
//! resolve to exactly one terminal outcome. Capabilities are injected at
//! construction; screens hold usecases, never raw effect handles.

pub mod account;
pub mod books;
pub mod chat;

pub use account::{LoginUsecase, LogoutUsecase, SignupUsecase};
pub use books::{AddBookUsecase, BookListUsecase, BookPage, EditBookUsecase};
pub use chat::{ChatRoomUsecase, RoomListUsecase, UserListUsecase};
