//! Domain layer for the book catalog.
//!
//! Pure data types and business rules with no I/O: the [`book::Book`]
//! entity and its validation rules, the [`pages::Pages`] wire codec, and
//! the reusable [`validator::Validator`] error accumulator. Persistence
//! and HTTP concerns live in the `shelf-db` and `shelf-api` crates.

pub mod book;
pub mod pages;
pub mod types;
pub mod validator;
