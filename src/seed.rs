use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::{
    catalog::Catalog,
    error::Result,
    types::{book::Book, isbn::Isbn},
};

/// Catalog used when no seed file is configured.
pub const DEFAULT_SEED: &str = include_str!("../data/books.json");

impl Catalog {
    /// Parse a seed document of the form `{"<isbn>": {"title", "author", "reviews"}}`.
    pub fn from_seed_json(s: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(s);
        let books: BTreeMap<Isbn, Book> = serde_path_to_error::deserialize(de)?;
        Ok(Catalog::new(books.into_iter().map(|(isbn, book)| Book {
            isbn: isbn.0,
            ..book
        })))
    }

    /// Read the seed file at `path`, or the built-in catalog if there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let path = shellexpand::path::tilde(path);
                info!("Reading catalog from {}.", path.display());
                Self::from_seed_json(&std::fs::read_to_string(path)?)
            }
            None => Self::from_seed_json(DEFAULT_SEED),
        }
    }
}
