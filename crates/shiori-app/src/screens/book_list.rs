//! Book list screen model.
//!
//! Paginated catalog listing. `fetch(false)` loads page 1 and replaces
//! the held list; `fetch(true)` loads the next page and appends it,
//! preserving the order of everything already shown. Additional fetches
//! no-op once the last page was reached.

use shiori_core::{
    domain::Book,
    errors::AppError,
    relay::{LoadingRelay, Relay},
    CancelToken,
};

use crate::usecases::{BookListUsecase, BookPage};

/// Headless model behind the paginated book list.
pub struct BookListScreen {
    usecase: BookListUsecase,
    books: Relay<Vec<Book>>,
    state: LoadingRelay<BookPage, AppError>,
    current_page: u32,
    has_next: bool,
    cancel: CancelToken,
}

impl BookListScreen {
    /// Create the screen with an empty list. Nothing is fetched until
    /// the first `fetch(false)`.
    pub fn new(usecase: BookListUsecase) -> Self {
        Self {
            usecase,
            books: Relay::new(Vec::new()),
            state: LoadingRelay::standby(),
            current_page: 0,
            has_next: false,
            cancel: CancelToken::new(),
        }
    }

    /// The aggregated list, in fetch order.
    pub fn books(&self) -> &Relay<Vec<Book>> {
        &self.books
    }

    /// Lifecycle of the most recent fetch; `Done` carries that page.
    pub fn state(&self) -> &LoadingRelay<BookPage, AppError> {
        &self.state
    }

    /// The page the list currently ends at. Zero before the first fetch.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// True when pages remain after the current one.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Stop applying results; the next completion is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Fetch one page. `is_additional` appends the next page to the held
    /// list; otherwise page 1 replaces it.
    pub async fn fetch(&mut self, is_additional: bool) {
        if self.cancel.is_cancelled() {
            return;
        }
        if is_additional && !self.has_next {
            return;
        }
        let page_number = if is_additional {
            self.current_page + 1
        } else {
            1
        };
        self.state.set_loading();

        let outcome = self.usecase.fetch_page(page_number).await;
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(page) => {
                if is_additional {
                    let fetched = page.books.clone();
                    self.books.update(|mut list| {
                        list.extend(fetched);
                        list
                    });
                } else {
                    self.books.set(page.books.clone());
                }
                self.current_page = page.current_page;
                self.has_next = page.has_next();
                self.state.set_done(page);
            }
            Err(error) => {
                tracing::debug!(%error, page = page_number, "book list fetch failed");
                self.state.set_failed(error);
            }
        }
    }
}

impl Drop for BookListScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
