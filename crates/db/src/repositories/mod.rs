//! Repository trait and its storage backends.

mod memory;
mod tecnico_repo;

use async_trait::async_trait;
use ordem_core::pagination::{Page, PageRequest};
use ordem_core::types::DbId;

use crate::error::DbError;
use crate::models::tecnico::Tecnico;

pub use memory::InMemoryTecnicoRepo;
pub use tecnico_repo::PgTecnicoRepo;

/// Persistence gateway for technicians.
///
/// Absence is reported through `Option`, never as an error, except for
/// [`delete_by_id`](Self::delete_by_id) which must tell a missing row apart
/// from a row the store refuses to delete.
#[async_trait]
pub trait TecnicoRepository: Send + Sync {
    /// Find a technician by id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Tecnico>, DbError>;

    /// One ordered window of technicians. A page past the end is empty.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Tecnico>, DbError>;

    /// Insert when `id` is `None`, otherwise upsert by id. Returns the stored row.
    async fn save(&self, tecnico: Tecnico) -> Result<Tecnico, DbError>;

    /// Remove a technician.
    ///
    /// Fails with [`DbError::NotFound`] when no row has this id and with
    /// [`DbError::Integrity`] when another record still references it.
    async fn delete_by_id(&self, id: DbId) -> Result<(), DbError>;

    /// Whether a technician with this id exists.
    async fn exists_by_id(&self, id: DbId) -> Result<bool, DbError>;

    /// Liveness probe for the backing store.
    async fn health_check(&self) -> Result<(), DbError>;
}
