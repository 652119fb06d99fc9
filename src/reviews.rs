use tracing::info;

use crate::{
    catalog::Catalog,
    error::{Error, Result},
    types::book::Book,
};

impl Catalog {
    /// Set `username`'s review of the book, replacing any earlier one.
    pub fn upsert_review(&mut self, isbn: &str, username: &str, text: &str) -> Result<&Book> {
        let book = self
            .get_mut(isbn)
            .ok_or_else(|| Error::NotFound(isbn.to_string()))?;
        match book.reviews.insert(username.to_string(), text.to_string()) {
            Some(_) => info!("{username} updated their review of {isbn}."),
            None => info!("{username} reviewed {isbn}."),
        }
        Ok(book)
    }

    pub fn delete_review(&mut self, isbn: &str, username: &str) -> Result<&Book> {
        let book = self
            .get_mut(isbn)
            .ok_or_else(|| Error::NotFound(isbn.to_string()))?;
        if book.reviews.remove(username).is_none() {
            return Err(Error::ReviewNotFound {
                isbn:     isbn.to_string(),
                username: username.to_string(),
            });
        }
        info!("{username} deleted their review of {isbn}.");
        Ok(book)
    }
}
