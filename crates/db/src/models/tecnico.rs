//! Technician entity model and DTO.

use ordem_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tecnicos` table.
///
/// `id` is `None` until the entity has been saved once. The stored credential
/// is always an Argon2id hash.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Tecnico {
    pub id: Option<DbId>,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "telefone")]
    pub phone: String,
    pub email: String,
    #[sqlx(rename = "senha_hash")]
    pub password_hash: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Tecnico {
    /// A technician that has not been persisted yet.
    pub fn new(name: String, phone: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            name,
            phone,
            email,
            password_hash,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Wire representation used for both request and response bodies.
///
/// `senha` is write-only: it is read from request bodies and never written
/// back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TecnicoDto {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub name: String,
    #[serde(rename = "telefone", default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "senha", default, skip_serializing)]
    #[validate(length(min = 1, message = "senha must not be empty"))]
    pub password: Option<String>,
}

impl From<Tecnico> for TecnicoDto {
    fn from(tecnico: Tecnico) -> Self {
        Self {
            id: tecnico.id,
            name: tecnico.name,
            phone: tecnico.phone,
            email: tecnico.email,
            password: None,
        }
    }
}
