use ordem_core::error::CoreError;
use ordem_core::types::DbId;

/// Failures reported by a [`TecnicoRepository`](crate::repositories::TecnicoRepository).
///
/// `NotFound` and `Integrity` are the two signals the service layer turns
/// into domain errors; everything else is an opaque storage failure.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    /// Constraint violations (SQLSTATE class 23) become [`DbError::Integrity`].
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().is_some_and(|code| code.starts_with("23")) {
                let message = match db_err.constraint() {
                    Some(constraint) => format!("{} ({constraint})", db_err.message()),
                    None => db_err.message().to_string(),
                };
                return DbError::Integrity(message);
            }
        }
        DbError::Sqlx(err)
    }
}

impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            DbError::Integrity(msg) => CoreError::Integrity(msg),
            DbError::Sqlx(err) => {
                tracing::error!(error = %err, "Storage failure");
                CoreError::Internal(err.to_string())
            }
        }
    }
}
