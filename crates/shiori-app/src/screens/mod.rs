//! Headless screen models.
//!
//! One model per screen, no rendering. Each holds its input fields, a
//! relay per observable output, the usecase it drives, and a cancel
//! token flipped on drop. A cancelled screen never applies another
//! result to its relays.

pub mod account;
pub mod book_form;
pub mod book_list;
pub mod chat_room;
pub mod chat_select;
pub mod chat_user_list;
pub mod login;
pub mod signup;
pub mod wish_list;

pub use account::AccountScreen;
pub use book_form::BookFormScreen;
pub use book_list::BookListScreen;
pub use chat_room::ChatRoomScreen;
pub use chat_select::ChatSelectScreen;
pub use chat_user_list::ChatUserListScreen;
pub use login::LoginScreen;
pub use signup::SignupScreen;
pub use wish_list::WishListScreen;
