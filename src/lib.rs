//! Bookstore catalog with per-user reviews.
//!
//! The catalog and the user directory live in memory. [server::router] exposes
//! them over HTTP, review changes require an access token from a prior login.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod reviews;
pub mod seed;
pub mod server;
pub mod types;
pub mod users;
