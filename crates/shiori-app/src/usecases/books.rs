//! Book catalog usecases: paginated listing, add, edit.

use shiori_api::{AddBookRequest, ApiClient, BookListRequest, BookListResponse, EditBookRequest};
use shiori_core::{
    domain::{Book, BookDraft},
    types::BookId,
    Result,
};

// =============================================================================
// Page result
// =============================================================================

/// One decoded catalog page with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPage {
    /// Books on this page, in server order.
    pub books: Vec<Book>,
    /// Total number of books across all pages.
    pub total_count: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// The page this result carries.
    pub current_page: u32,
    /// Page size the server applied.
    pub limit: u32,
}

impl BookPage {
    /// True when pages remain after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl From<BookListResponse> for BookPage {
    fn from(response: BookListResponse) -> Self {
        Self {
            books: response.result.into_iter().map(Book::from).collect(),
            total_count: response.total_count,
            total_pages: response.total_pages,
            current_page: response.current_page,
            limit: response.limit,
        }
    }
}

// =============================================================================
// Usecases
// =============================================================================

/// Fetches one catalog page.
#[derive(Clone)]
pub struct BookListUsecase {
    api: ApiClient,
}

impl BookListUsecase {
    /// Create a book list usecase over the given client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// GET `/books` for the given page (1-based), default page size.
    pub async fn fetch_page(&self, page: u32) -> Result<BookPage> {
        let response = self.api.execute(&BookListRequest::new(page)).await?;
        Ok(BookPage::from(response))
    }
}

/// Creates one book from a validated draft.
#[derive(Clone)]
pub struct AddBookUsecase {
    api: ApiClient,
}

impl AddBookUsecase {
    /// Create an add usecase over the given client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// POST `/books` with the draft fields.
    pub async fn add(&self, draft: BookDraft) -> Result<Book> {
        let response = self.api.execute(&AddBookRequest::new(draft)).await?;
        Ok(Book::from(response.result))
    }
}

/// Updates one book from a validated draft.
#[derive(Clone)]
pub struct EditBookUsecase {
    api: ApiClient,
}

impl EditBookUsecase {
    /// Create an edit usecase over the given client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// PUT `/books/{id}` with the draft fields.
    pub async fn edit(&self, id: BookId, draft: BookDraft) -> Result<Book> {
        let response = self.api.execute(&EditBookRequest::new(id, draft)).await?;
        Ok(Book::from(response.result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiori_api::BookResult;

    fn page_response(current_page: u32, total_pages: u32, names: &[&str]) -> BookListResponse {
        BookListResponse {
            status: 200,
            result: names
                .iter()
                .enumerate()
                .map(|(index, name)| BookResult {
                    id: index as u64 + 1,
                    name: (*name).to_string(),
                    image: None,
                    price: Some(1000),
                    purchase_date: None,
                })
                .collect(),
            total_count: 40,
            total_pages,
            current_page,
            limit: 20,
        }
    }

    #[test]
    fn test_page_keeps_server_order() {
        let page = BookPage::from(page_response(1, 2, &["first", "second", "third"]));

        let names: Vec<&str> = page.books.iter().map(|book| book.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(page.current_page, 1);
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page = BookPage::from(page_response(2, 2, &["last"]));
        assert!(!page.has_next());
    }
}
