//! Persistence seam between the manager and a concrete store.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ContentId;

/// Single-table CRUD over entity `E`, driven by transfer object `T`.
///
/// Absence is `Ok(None)`, never an error. `Err` is reserved for store faults
/// (connection loss, constraint violations and the like).
#[async_trait]
pub trait Gateway<E, T>: Send + Sync {
    /// Every stored record; empty when there are none.
    async fn read_all(&self) -> CoreResult<Vec<E>>;

    async fn read(&self, id: ContentId) -> CoreResult<Option<E>>;

    /// Assign a new id and persist.
    ///
    /// `Ok(None)` means the store declined to create the record without
    /// raising a fault.
    async fn create(&self, dto: T) -> CoreResult<Option<E>>;

    /// Merge the DTO's set fields into the stored record.
    async fn update(&self, id: ContentId, dto: T) -> CoreResult<Option<E>>;

    /// Remove the record. Returns `id` whether or not it existed.
    async fn delete(&self, id: ContentId) -> CoreResult<ContentId>;
}
