use std::collections::BTreeMap;

use crate::types::{book::Book, isbn::Isbn};

/// Every book the store sells, keyed by isbn.
///
/// Keys are fixed once the catalog is built, only the reviews of a book can
/// change afterwards. Iteration follows [Isbn] ordering.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: BTreeMap<Isbn, Book>,
}

impl Catalog {
    pub fn new(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: books
                .into_iter()
                .map(|book| (Isbn(book.isbn.clone()), book))
                .collect(),
        }
    }

    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(&Isbn::from(isbn))
    }

    pub(crate) fn get_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.get_mut(&Isbn::from(isbn))
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn as_map(&self) -> &BTreeMap<Isbn, Book> {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
