use crate::entry::{same_name, Collection, Draft, Entry, PastWorkItem, Product};
use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

// ---------------------------------------------------------------------------
// CatalogStats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_past_work: usize,
    pub last_updated: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// CatalogService
// ---------------------------------------------------------------------------

/// Name-indexed operations over the catalog collections.
///
/// Every mutation is one load, check, mutate, save cycle. Writers to the same
/// collection within this process are serialized by a per-collection lock;
/// other processes writing the same files still race last-writer-wins.
#[derive(Debug)]
pub struct CatalogService {
    store: CatalogStore,
    products_lock: Mutex<()>,
    past_work_lock: Mutex<()>,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            products_lock: Mutex::new(()),
            past_work_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        let lock = match collection {
            Collection::Products => &self.products_lock,
            Collection::PastWork => &self.past_work_lock,
        };
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new entry stamped with `added_by` and the current time.
    pub fn add<T: Entry>(&self, mut draft: T::Draft, added_by: &str) -> Result<T> {
        validate_draft(&draft)?;
        let name = draft.name().trim().to_string();
        *draft.name_mut() = name.clone();

        let _guard = self.lock(T::COLLECTION);
        let mut entries: Vec<T> = self.store.load_for_update()?;
        if entries.iter().any(|e| same_name(e.name(), &name)) {
            return Err(CatalogError::DuplicateName {
                collection: T::COLLECTION,
                name,
            });
        }

        let entry = T::stamp(draft, added_by, Utc::now());
        entries.push(entry.clone());
        self.store.save(&entries)?;

        tracing::info!(collection = %T::COLLECTION, name = %name, added_by, "entry added");
        Ok(entry)
    }

    /// Remove the first entry whose name matches case-insensitively, ignoring
    /// surrounding whitespace.
    pub fn remove<T: Entry>(&self, name: &str) -> Result<T> {
        let name = name.trim();
        let _guard = self.lock(T::COLLECTION);
        let mut entries: Vec<T> = self.store.load_for_update()?;
        let Some(pos) = entries.iter().position(|e| same_name(e.name(), name)) else {
            return Err(CatalogError::NotFound {
                collection: T::COLLECTION,
                name: name.to_string(),
            });
        };

        let removed = entries.remove(pos);
        self.store.save(&entries)?;

        tracing::info!(collection = %T::COLLECTION, name = %removed.name(), "entry removed");
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn list<T: Entry>(&self) -> Result<Vec<T>> {
        self.store.load()
    }

    pub fn find_by_name<T: Entry>(&self, name: &str) -> Result<Option<T>> {
        let name = name.trim();
        let entries: Vec<T> = self.store.load()?;
        Ok(entries.into_iter().find(|e| same_name(e.name(), name)))
    }

    /// Entries whose name contains `query`, ignoring case. An empty query
    /// matches every entry.
    pub fn search<T: Entry>(&self, query: &str) -> Result<Vec<T>> {
        let needle = query.to_lowercase();
        let entries: Vec<T> = self.store.load()?;
        Ok(entries
            .into_iter()
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .collect())
    }

    pub fn stats(&self) -> Result<CatalogStats> {
        Ok(CatalogStats {
            total_products: self.list::<Product>()?.len(),
            total_past_work: self.list::<PastWorkItem>()?.len(),
            last_updated: Utc::now(),
        })
    }
}

fn validate_draft<D: Draft>(draft: &D) -> Result<()> {
    if draft.name().trim().is_empty() {
        return Err(CatalogError::Validation("name is required".into()));
    }
    for (field, value) in draft.urls() {
        if value.trim().is_empty() {
            return Err(CatalogError::Validation(format!("{field} is required")));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
