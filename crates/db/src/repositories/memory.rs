//! In-process technician store.
//!
//! Selected with `STORAGE_BACKEND=memory` and used by the HTTP tests. One
//! `RwLock` guards every row, so id assignment and deletes are atomic.
//! Referential integrity is modelled with a per-row reference count that
//! other records (service orders) bump through [`InMemoryTecnicoRepo::add_reference`].

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use ordem_core::pagination::{Direction, Page, PageRequest};
use ordem_core::tecnico::ENTITY_NAME;
use ordem_core::types::DbId;
use tokio::sync::RwLock;

use super::TecnicoRepository;
use crate::error::DbError;
use crate::models::tecnico::Tecnico;

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<DbId, Tecnico>,
    last_id: DbId,
    references: HashMap<DbId, usize>,
}

/// Technician repository kept entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryTecnicoRepo {
    store: RwLock<Store>,
}

impl InMemoryTecnicoRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that another row now references technician `id`.
    pub async fn add_reference(&self, id: DbId) -> Result<(), DbError> {
        let mut store = self.store.write().await;
        if !store.rows.contains_key(&id) {
            return Err(DbError::Integrity(format!(
                "cannot reference missing {ENTITY_NAME} {id}"
            )));
        }
        *store.references.entry(id).or_default() += 1;
        Ok(())
    }

    /// Drop one reference to technician `id`, if any.
    pub async fn remove_reference(&self, id: DbId) {
        let mut store = self.store.write().await;
        if let Some(count) = store.references.get_mut(&id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                store.references.remove(&id);
            }
        }
    }
}

fn compare(a: &Tecnico, b: &Tecnico, property: &str) -> Ordering {
    match property {
        "nome" => a.name.cmp(&b.name),
        "telefone" => a.phone.cmp(&b.phone),
        "email" => a.email.cmp(&b.email),
        _ => a.id.cmp(&b.id),
    }
}

#[async_trait]
impl TecnicoRepository for InMemoryTecnicoRepo {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Tecnico>, DbError> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Tecnico>, DbError> {
        let store = self.store.read().await;
        let mut rows: Vec<&Tecnico> = store.rows.values().collect();

        let property = request.sort.property.as_str();
        rows.sort_by(|a, b| {
            let primary = match request.sort.direction {
                Direction::Asc => compare(a, b, property),
                Direction::Desc => compare(b, a, property),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        let total = i64::try_from(rows.len()).unwrap_or(i64::MAX);
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = rows
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn save(&self, mut tecnico: Tecnico) -> Result<Tecnico, DbError> {
        let mut store = self.store.write().await;
        let now = Utc::now();

        let id = match tecnico.id {
            Some(id) => id,
            None => store.last_id + 1,
        };
        store.last_id = store.last_id.max(id);

        tecnico.id = Some(id);
        tecnico.created_at = store
            .rows
            .get(&id)
            .and_then(|existing| existing.created_at)
            .or(Some(now));
        tecnico.updated_at = Some(now);

        store.rows.insert(id, tecnico.clone());
        Ok(tecnico)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), DbError> {
        let mut store = self.store.write().await;
        if !store.rows.contains_key(&id) {
            return Err(DbError::NotFound {
                entity: ENTITY_NAME,
                id,
            });
        }
        if let Some(count) = store.references.get(&id) {
            return Err(DbError::Integrity(format!(
                "{ENTITY_NAME} {id} is still referenced by {count} record(s)"
            )));
        }
        store.rows.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, DbError> {
        Ok(self.store.read().await.rows.contains_key(&id))
    }

    async fn health_check(&self) -> Result<(), DbError> {
        Ok(())
    }
}
