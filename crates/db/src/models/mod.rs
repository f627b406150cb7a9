//! Database row structs.
//!
//! Rows map one-to-one onto table columns and convert into the domain types
//! from `catalog_core`, which know nothing about sqlx.

pub mod content;
