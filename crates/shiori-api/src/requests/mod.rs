//! Typed requests against the catalog server.

pub mod account;
pub mod books;

pub use account::{
    AccountParams, EmptyResponse, LoginRequest, LogoutRequest, SignupRequest, UserResponse,
    UserResult,
};
pub use books::{
    AddBookRequest, BookListRequest, BookListResponse, BookParams, BookResponse, BookResult,
    EditBookRequest, DEFAULT_PAGE_SIZE,
};
