//! Technician use cases.
//!
//! Converts between [`TecnicoDto`] and [`Tecnico`], hashes credentials, and
//! turns repository failures into [`CoreError`] kinds.

use std::sync::Arc;

use ordem_core::error::CoreError;
use ordem_core::pagination::{Page, PageRequest};
use ordem_core::password::hash_password;
use ordem_core::tecnico::{validate_sort, ENTITY_NAME};
use ordem_core::types::DbId;
use ordem_db::models::tecnico::{Tecnico, TecnicoDto};
use ordem_db::repositories::TecnicoRepository;
use validator::Validate;

/// Orchestrates technician reads and writes over a [`TecnicoRepository`].
///
/// Cheap to clone; the repository is shared behind an `Arc`.
#[derive(Clone)]
pub struct TecnicoService {
    repo: Arc<dyn TecnicoRepository>,
}

impl TecnicoService {
    pub fn new(repo: Arc<dyn TecnicoRepository>) -> Self {
        Self { repo }
    }

    /// One page of technicians, metadata passed through unchanged.
    pub async fn find_all_paged(&self, request: PageRequest) -> Result<Page<TecnicoDto>, CoreError> {
        validate_sort(&request.sort)?;
        let page = self.repo.find_all(&request).await?;
        Ok(page.map(TecnicoDto::from))
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<TecnicoDto, CoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(TecnicoDto::from)
            .ok_or(not_found(id))
    }

    /// Create a technician. Any client-supplied id is ignored.
    pub async fn insert(&self, dto: TecnicoDto) -> Result<TecnicoDto, CoreError> {
        validate(&dto)?;
        let password = dto
            .password
            .as_deref()
            .ok_or_else(|| CoreError::Validation("senha is required".into()))?;

        let entity = Tecnico::new(dto.name, dto.phone, dto.email, hash(password)?);
        let saved = self.repo.save(entity).await?;
        tracing::info!(tecnico_id = ?saved.id, "Tecnico created");
        Ok(saved.into())
    }

    /// Replace every field but the id. The stored password is kept when the
    /// DTO carries none.
    pub async fn update(&self, id: DbId, dto: TecnicoDto) -> Result<TecnicoDto, CoreError> {
        validate(&dto)?;
        let mut entity = self.repo.find_by_id(id).await?.ok_or(not_found(id))?;

        entity.name = dto.name;
        entity.phone = dto.phone;
        entity.email = dto.email;
        if let Some(password) = dto.password.as_deref() {
            entity.password_hash = hash(password)?;
        }

        let saved = self.repo.save(entity).await?;
        tracing::info!(tecnico_id = id, "Tecnico updated");
        Ok(saved.into())
    }

    /// Delete a technician.
    ///
    /// Missing ids are `NotFound`; rows still referenced elsewhere are
    /// `Integrity`. The existence pre-check keeps the common miss off the
    /// error path; `delete_by_id` still reports a row removed in between.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.repo.delete_by_id(id).await?;
        tracing::info!(tecnico_id = id, "Tecnico deleted");
        Ok(())
    }

    /// Whether the backing store answers.
    pub async fn storage_healthy(&self) -> bool {
        match self.repo.health_check().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Storage health check failed");
                false
            }
        }
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}

/// Field messages already use the wire names (`nome`, `senha`), so only those
/// are reported.
fn validate(dto: &TecnicoDto) -> Result<(), CoreError> {
    dto.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_values()
            .flatten()
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    })
}

fn hash(password: &str) -> Result<String, CoreError> {
    hash_password(password).map_err(|e| CoreError::Internal(format!("password hashing failed: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
