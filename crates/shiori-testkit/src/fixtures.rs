//! Canned wire bodies and sample entities.
//!
//! Bodies are built with the exact camelCase keys the catalog server
//! sends, so decoding in tests goes through the same serde path as
//! production traffic.

use serde_json::{json, Value};

use shiori_core::{
    domain::{Book, Profile, User},
    types::{AuthToken, BookId, ProfileId, Timestamp, UserId},
};

/// Envelope for a user result, as login and signup answer it.
pub fn user_body(id: u64, email: &str, token: &str) -> Value {
    json!({
        "status": 200,
        "result": { "id": id, "email": email, "token": token }
    })
}

/// Envelope for an empty result, as logout answers it.
pub fn empty_body() -> Value {
    json!({ "status": 200 })
}

/// Envelope for a single book result, as add and edit answer it.
pub fn book_body(id: u64, name: &str, price: i64) -> Value {
    json!({
        "status": 200,
        "result": { "id": id, "name": name, "price": price }
    })
}

/// Envelope for one catalog page. Book ids continue across pages so a
/// two-page fetch yields distinct books.
pub fn book_page_body(current_page: u32, total_pages: u32, limit: u32, names: &[&str]) -> Value {
    let offset = u64::from(current_page.saturating_sub(1)) * u64::from(limit);
    let result: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "id": offset + index as u64 + 1,
                "name": name,
                "price": 1_000,
            })
        })
        .collect();
    json!({
        "status": 200,
        "result": result,
        "totalCount": u64::from(total_pages) * u64::from(limit),
        "totalPages": total_pages,
        "currentPage": current_page,
        "limit": limit,
    })
}

/// Error body the server sends with non-success statuses.
pub fn error_body(status: u16, message: &str) -> Value {
    json!({ "status": status, "message": message })
}

/// A book with the given id and name, everything else empty.
pub fn sample_book(id: u64, name: &str) -> Book {
    Book {
        id: BookId::new(id),
        name: name.to_string(),
        image_url: None,
        price: Some(1_000),
        purchase_date: None,
    }
}

/// A signed-in user as login would produce it.
pub fn sample_user(id: u64, email: &str) -> User {
    User {
        id: UserId::new(id),
        email: email.to_string(),
        token: AuthToken::from("test-token"),
    }
}

/// A chat profile with a fresh id.
pub fn sample_profile(name: &str) -> Profile {
    Profile {
        id: ProfileId::new(),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        icon_url: None,
        created_at: Timestamp::from_millis(0),
    }
}
