pub mod book;
pub mod isbn;
pub mod session;
pub mod user;
