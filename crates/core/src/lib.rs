//! Domain types, errors, and field rules shared by the DB and API layers.
//!
//! Nothing in this crate performs I/O.

pub mod book;
pub mod error;
pub mod review;
pub mod types;
pub mod user;
