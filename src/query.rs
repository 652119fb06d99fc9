use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    catalog::Catalog,
    error::{Error, Result},
    types::{
        book::{Book, BookListing, Reviews},
        isbn::Isbn,
    },
};

impl Catalog {
    pub fn list_all(&self) -> &BTreeMap<Isbn, Book> {
        self.as_map()
    }

    pub fn get_by_isbn(&self, isbn: &str) -> Result<&Book> {
        self.get(isbn).ok_or_else(|| Error::NotFound(isbn.to_string()))
    }

    /// Books whose author equals `author`, ignoring case.
    pub fn get_by_author(&self, author: &str) -> Result<Vec<BookListing>> {
        let author = author.to_lowercase();
        let found = self.matching(|book| book.author.to_lowercase() == author);
        debug!("{} books by {author}.", found.len());
        non_empty(found, &author)
    }

    /// Books whose title contains `title`, ignoring case.
    pub fn get_by_title_substring(&self, title: &str) -> Result<Vec<BookListing>> {
        let title = title.to_lowercase();
        let found = self.matching(|book| book.title.to_lowercase().contains(&title));
        debug!("{} books matching {title}.", found.len());
        non_empty(found, &title)
    }

    pub fn get_reviews(&self, isbn: &str) -> Result<&Reviews> {
        Ok(&self.get_by_isbn(isbn)?.reviews)
    }

    fn matching(&self, predicate: impl Fn(&Book) -> bool) -> Vec<BookListing> {
        self.books()
            .filter(|book| predicate(book))
            .map(BookListing::from)
            .collect()
    }
}

fn non_empty(found: Vec<BookListing>, term: &str) -> Result<Vec<BookListing>> {
    if found.is_empty() {
        return Err(Error::NotFound(term.to_string()));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new([
            Book::new("1", "Book One", "Jane Doe"),
            Book::new("2", "Another Story", "John Roe"),
            Book::new("3", "The Last One", "jane doe"),
        ])
    }

    #[test]
    fn by_isbn() {
        let catalog = catalog();
        assert_eq!(catalog.get_by_isbn("2").unwrap().title, "Another Story");
        assert!(matches!(catalog.get_by_isbn("99"), Err(Error::NotFound(_))));
        assert!(matches!(catalog.get_by_isbn(""), Err(Error::NotFound(_))));
    }

    #[test]
    fn by_author_ignores_case() {
        let found = catalog().get_by_author("JANE DOE").unwrap();
        let isbns: Vec<_> = found.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["1", "3"]);
    }

    #[test]
    fn by_author_is_exact() {
        assert!(matches!(catalog().get_by_author("jane"), Err(Error::NotFound(_))));
    }

    #[test]
    fn by_title_substring() {
        let found = catalog().get_by_title_substring("ONE").unwrap();
        let isbns: Vec<_> = found.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["1", "3"]);
        assert!(matches!(
            catalog().get_by_title_substring("missing"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn seeded_example() {
        let catalog = Catalog::new([Book::new("1", "Book One", "Jane Doe")]);
        let expected = vec![BookListing {
            isbn:    "1".into(),
            title:   "Book One".into(),
            author:  "Jane Doe".into(),
            reviews: Reviews::new(),
        }];
        assert_eq!(catalog.get_by_author("jane doe").unwrap(), expected);
        assert_eq!(catalog.get_by_title_substring("one").unwrap(), expected);
        assert!(matches!(catalog.get_by_isbn("99"), Err(Error::NotFound(_))));
    }

    #[test]
    fn reviews_of_unknown_book() {
        assert!(matches!(catalog().get_reviews("42"), Err(Error::NotFound(_))));
        assert!(catalog().get_reviews("1").unwrap().is_empty());
    }
}
