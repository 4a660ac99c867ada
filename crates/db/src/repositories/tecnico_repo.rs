//! Repository for the `tecnicos` table.

use async_trait::async_trait;
use ordem_core::pagination::{Page, PageRequest};
use ordem_core::tecnico::{sort_column, ENTITY_NAME};
use ordem_core::types::DbId;
use sqlx::PgPool;

use super::TecnicoRepository;
use crate::error::DbError;
use crate::models::tecnico::Tecnico;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, telefone, email, senha_hash, created_at, updated_at";

/// PostgreSQL-backed technician repository.
#[derive(Debug, Clone)]
pub struct PgTecnicoRepo {
    pool: PgPool,
}

impl PgTecnicoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, tecnico: &Tecnico) -> Result<Tecnico, DbError> {
        let query = format!(
            "INSERT INTO tecnicos (nome, telefone, email, senha_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Tecnico>(&query)
            .bind(&tecnico.name)
            .bind(&tecnico.phone)
            .bind(&tecnico.email)
            .bind(&tecnico.password_hash)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert or replace the row with `id`.
    ///
    /// An explicit id past the sequence moves `tecnicos_id_seq` forward, so a
    /// later plain insert never collides with it.
    async fn upsert(&self, id: DbId, tecnico: &Tecnico) -> Result<Tecnico, DbError> {
        let query = format!(
            "INSERT INTO tecnicos (id, nome, telefone, email, senha_hash)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                nome = EXCLUDED.nome,
                telefone = EXCLUDED.telefone,
                email = EXCLUDED.email,
                senha_hash = EXCLUDED.senha_hash,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Tecnico>(&query)
            .bind(id)
            .bind(&tecnico.name)
            .bind(&tecnico.phone)
            .bind(&tecnico.email)
            .bind(&tecnico.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "SELECT setval('tecnicos_id_seq', $1)
             FROM tecnicos_id_seq
             WHERE $1 >= last_value",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }
}

#[async_trait]
impl TecnicoRepository for PgTecnicoRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Tecnico>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM tecnicos WHERE id = $1");
        let row = sqlx::query_as::<_, Tecnico>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Tecnico>, DbError> {
        // Sort properties are validated upstream; anything else falls back to id.
        let column = sort_column(&request.sort.property).unwrap_or("id");
        let query = format!(
            "SELECT {COLUMNS} FROM tecnicos \
             ORDER BY {column} {}, id ASC \
             LIMIT $1 OFFSET $2",
            request.sort.direction.as_sql()
        );
        // One snapshot for the window and its total.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, Tecnico>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(&mut *tx)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM tecnicos")
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Page::new(rows, request, total))
    }

    async fn save(&self, tecnico: Tecnico) -> Result<Tecnico, DbError> {
        match tecnico.id {
            None => self.insert(&tecnico).await,
            Some(id) => self.upsert(id, &tecnico).await,
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM tecnicos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: ENTITY_NAME,
                id,
            });
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, DbError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tecnicos WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn health_check(&self) -> Result<(), DbError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
