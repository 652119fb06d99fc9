use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Review text keyed by the username that wrote it.
pub type Reviews = BTreeMap<String, String>;

/// A catalog entry.
///
/// The isbn is the catalog key, so it is left out when a book is serialized on
/// its own or as a value of the catalog mapping. [BookListing] carries it
/// inline for search results.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(skip)]
    pub isbn:    String,
    pub author:  String,
    pub title:   String,
    #[serde(default)]
    pub reviews: Reviews,
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn:    isbn.into(),
            author:  author.into(),
            title:   title.into(),
            reviews: Reviews::new(),
        }
    }
}

/// Search result row, `{isbn, title, author, reviews}`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListing {
    pub isbn:    String,
    pub title:   String,
    pub author:  String,
    pub reviews: Reviews,
}

impl From<&Book> for BookListing {
    fn from(book: &Book) -> Self {
        Self {
            isbn:    book.isbn.clone(),
            title:   book.title.clone(),
            author:  book.author.clone(),
            reviews: book.reviews.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn book_serializes_without_isbn() {
        let mut book = Book::new("1", "Book One", "Jane Doe");
        book.reviews.insert("alice".into(), "great".into());
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({
                "author": "Jane Doe",
                "title": "Book One",
                "reviews": { "alice": "great" },
            })
        );
    }

    #[test]
    fn listing_carries_isbn() {
        let book = Book::new("1", "Book One", "Jane Doe");
        assert_eq!(
            serde_json::to_value(BookListing::from(&book)).unwrap(),
            json!({
                "isbn": "1",
                "title": "Book One",
                "author": "Jane Doe",
                "reviews": {},
            })
        );
    }
}
