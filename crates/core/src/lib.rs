//! Domain layer for the content catalog.
//!
//! Holds the content model, the genre policy, the persistence [`gateway`]
//! seam and the [`manager`] service built on top of it. Nothing in here knows
//! about HTTP or a specific database.

pub mod content;
pub mod error;
pub mod gateway;
pub mod genres;
pub mod manager;
pub mod memory;
pub mod traced;
pub mod types;
