//! Row models and insert/update DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO for full-record updates (where the entity is mutable)

pub mod book;
pub mod category;
pub mod review;
pub mod user;
