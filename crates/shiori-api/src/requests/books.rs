//! Book requests: paginated list, add, edit.

use crate::error::ApiError;
use crate::request::{encode_body, ApiRequest};
use crate::transport::HttpMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiori_core::{Book, BookDraft, BookId};

/// Default page size for book list requests.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Book fields submitted by add and edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookParams {
    /// Title.
    pub name: String,
    /// Base64-encoded cover image payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Purchase price in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Date of purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

impl From<BookDraft> for BookParams {
    fn from(draft: BookDraft) -> Self {
        Self {
            name: draft.name,
            image: draft.image,
            price: draft.price,
            purchase_date: draft.purchase_date,
        }
    }
}

/// Book payload inside list and detail responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookResult {
    /// Server-assigned book identifier.
    pub id: u64,
    /// Title.
    pub name: String,
    /// Hosted cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Purchase price in the smallest currency unit.
    #[serde(default)]
    pub price: Option<i64>,
    /// Date of purchase.
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}

impl From<BookResult> for Book {
    fn from(result: BookResult) -> Self {
        Self {
            id: BookId::new(result.id),
            name: result.name,
            image_url: result.image,
            price: result.price,
            purchase_date: result.purchase_date,
        }
    }
}

/// Response body of the paginated book list.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookListResponse {
    /// Server-reported status.
    pub status: u16,
    /// Books on this page, in server order.
    pub result: Vec<BookResult>,
    /// Total number of books across all pages.
    pub total_count: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// The page this response carries.
    pub current_page: u32,
    /// Page size the server applied.
    pub limit: u32,
}

impl BookListResponse {
    /// True when pages remain after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Response body of add and edit.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    /// Server-reported status.
    pub status: u16,
    /// The created or updated book.
    pub result: BookResult,
}

/// GET `/books?limit&page`, authenticated.
#[derive(Debug, Clone)]
pub struct BookListRequest {
    limit: u32,
    page: u32,
}

impl BookListRequest {
    /// Build a list request for `page` with the default page size.
    pub fn new(page: u32) -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            page,
        }
    }

    /// Build a list request with an explicit page size.
    pub fn with_limit(page: u32, limit: u32) -> Self {
        Self { limit, page }
    }
}

impl ApiRequest for BookListRequest {
    type Response = BookListResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn path(&self) -> String {
        "/books".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        vec![
            ("limit".to_string(), self.limit.to_string()),
            ("page".to_string(), self.page.to_string()),
        ]
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

/// POST `/books` with a book draft, authenticated.
#[derive(Debug, Clone)]
pub struct AddBookRequest {
    params: BookParams,
}

impl AddBookRequest {
    /// Build an add request from a validated draft.
    pub fn new(draft: BookDraft) -> Self {
        Self {
            params: draft.into(),
        }
    }
}

impl ApiRequest for AddBookRequest {
    type Response = BookResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        "/books".to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, ApiError> {
        encode_body(&self.params)
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

/// PUT `/books/{id}` with a book draft, authenticated.
#[derive(Debug, Clone)]
pub struct EditBookRequest {
    id: BookId,
    params: BookParams,
}

impl EditBookRequest {
    /// Build an edit request for `id` from a validated draft.
    pub fn new(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            params: draft.into(),
        }
    }
}

impl ApiRequest for EditBookRequest {
    type Response = BookResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Put
    }

    fn path(&self) -> String {
        format!("/books/{}", self.id.value())
    }

    fn body(&self) -> Result<Option<serde_json::Value>, ApiError> {
        encode_body(&self.params)
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_shape() {
        let request = BookListRequest::new(2);
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/books");
        assert!(request.requires_auth());
        assert_eq!(
            request.query(),
            vec![
                ("limit".to_string(), "20".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_edit_path_carries_id() {
        let request = EditBookRequest::new(BookId::new(42), BookDraft::default());
        assert_eq!(request.method(), HttpMethod::Put);
        assert_eq!(request.path(), "/books/42");
    }

    #[test]
    fn test_params_serialize_camel_case() {
        let draft = BookDraft {
            name: "Sanshiro".to_string(),
            image: None,
            price: Some(650),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        let body = AddBookRequest::new(draft).body().unwrap().unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Sanshiro",
                "price": 650,
                "purchaseDate": "2024-01-15"
            })
        );
    }

    #[test]
    fn test_list_response_decodes_camel_case() {
        let json = r#"{
            "status": 200,
            "result": [
                {"id": 1, "name": "Kokoro", "image": null, "price": 500, "purchaseDate": "2023-11-02"},
                {"id": 2, "name": "Botchan"}
            ],
            "totalCount": 41,
            "totalPages": 3,
            "currentPage": 2,
            "limit": 20
        }"#;
        let response: BookListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result.len(), 2);
        assert_eq!(response.total_count, 41);
        assert!(response.has_next());

        let book = Book::from(response.result[0].clone());
        assert_eq!(book.id, BookId::new(1));
        assert_eq!(book.purchase_date, NaiveDate::from_ymd_opt(2023, 11, 2));

        let bare = Book::from(response.result[1].clone());
        assert_eq!(bare.price, None);
        assert_eq!(bare.image_url, None);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let json = r#"{
            "status": 200,
            "result": [],
            "totalCount": 41,
            "totalPages": 3,
            "currentPage": 3,
            "limit": 20
        }"#;
        let response: BookListResponse = serde_json::from_str(json).unwrap();
        assert!(!response.has_next());
    }
}
