//! Wish list screen model.
//!
//! Purely client-side: membership is toggled by book identity and lives
//! only as long as the session. Insertion order is preserved so the list
//! renders in the order books were added.

use shiori_core::{domain::Book, relay::Relay, types::BookId};

/// Headless model behind the wish list.
#[derive(Default)]
pub struct WishListScreen {
    books: Relay<Vec<Book>>,
}

impl WishListScreen {
    /// Create an empty wish list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The wished books, in insertion order.
    pub fn books(&self) -> &Relay<Vec<Book>> {
        &self.books
    }

    /// True when `id` is on the list.
    pub fn contains(&self, id: BookId) -> bool {
        self.books.get().iter().any(|book| book.id == id)
    }

    /// Add `book` if absent, remove it if present. Identity is the book
    /// id; an edited copy of a wished book replaces nothing.
    pub fn toggle(&self, book: Book) {
        self.books.update(|mut list| {
            match list.iter().position(|existing| existing.id == book.id) {
                Some(index) => {
                    list.remove(index);
                }
                None => list.push(book),
            }
            list
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u64, name: &str) -> Book {
        Book {
            id: BookId::new(id),
            name: name.to_string(),
            image_url: None,
            price: None,
            purchase_date: None,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let screen = WishListScreen::new();
        let first = book(1, "first");

        screen.toggle(first.clone());
        assert!(screen.contains(first.id));

        screen.toggle(first.clone());
        assert!(!screen.contains(first.id));
        assert!(screen.books().get().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let screen = WishListScreen::new();
        screen.toggle(book(1, "first"));
        screen.toggle(book(2, "second"));
        screen.toggle(book(3, "third"));
        screen.toggle(book(2, "second"));

        let names: Vec<String> = screen
            .books()
            .get()
            .iter()
            .map(|book| book.name.clone())
            .collect();
        assert_eq!(names, ["first", "third"]);
    }

    #[test]
    fn test_list_is_observable() {
        let screen = WishListScreen::new();
        let mut subscription = screen.books().subscribe();
        assert_eq!(subscription.try_recv(), Some(Vec::new()));

        screen.toggle(book(7, "watched"));
        let update = subscription.try_recv().unwrap_or_default();
        assert_eq!(update.len(), 1);
        assert_eq!(update[0].id, BookId::new(7));
    }
}
