use crate::config::{Config, ReadPolicy};
use crate::entry::{Collection, Entry};
use crate::error::{CatalogError, Result};
use crate::{io, paths};
use std::path::{Path, PathBuf};

/// Whole-document JSON persistence for the catalog collections.
///
/// Each collection lives in its own pretty-printed JSON array. Writes replace
/// the full document; there is no merging or in-place append.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    data_dir: PathBuf,
    read_policy: ReadPolicy,
}

impl CatalogStore {
    pub fn new(data_dir: impl Into<PathBuf>, read_policy: ReadPolicy) -> Self {
        Self {
            data_dir: data_dir.into(),
            read_policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir.clone(), config.read_policy)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, collection: Collection) -> PathBuf {
        paths::collection_path(&self.data_dir, collection)
    }

    /// Create the backing document with an empty array if it is absent.
    /// Returns true when the document was created by this call.
    pub fn ensure_initialized(&self, collection: Collection) -> Result<bool> {
        let path = self.path(collection);
        let created = io::write_if_missing(&path, b"[]")?;
        if created {
            tracing::info!(%collection, path = %path.display(), "created empty collection");
        }
        Ok(created)
    }

    pub fn ensure_all(&self) -> Result<()> {
        for &collection in Collection::all() {
            self.ensure_initialized(collection)?;
        }
        Ok(())
    }

    /// Load the full collection for `T`.
    ///
    /// A missing document is an empty collection. An unreadable or corrupt one
    /// is also treated as empty under [`ReadPolicy::Lenient`]; under
    /// [`ReadPolicy::Strict`] the failure is returned.
    pub fn load<T: Entry>(&self) -> Result<Vec<T>> {
        self.load_with(self.read_policy)
    }

    /// Load the collection ahead of a [`save`](Self::save). Always strict, so a
    /// document that cannot be read is never overwritten.
    pub fn load_for_update<T: Entry>(&self) -> Result<Vec<T>> {
        self.load_with(ReadPolicy::Strict)
    }

    fn load_with<T: Entry>(&self, policy: ReadPolicy) -> Result<Vec<T>> {
        let collection = T::COLLECTION;
        let path = self.path(collection);

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return recover(
                    policy,
                    collection,
                    CatalogError::StorageUnavailable {
                        path: path.clone(),
                        source,
                    },
                )
            }
        };

        match serde_json::from_str::<Vec<T>>(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => recover(policy, collection, e.into()),
        }
    }

    /// Replace the full document for `T` with `entries`, pretty-printed.
    pub fn save<T: Entry>(&self, entries: &[T]) -> Result<()> {
        let path = self.path(T::COLLECTION);
        let data = serde_json::to_string_pretty(entries)?;
        io::atomic_write(&path, data.as_bytes())?;
        tracing::debug!(collection = %T::COLLECTION, count = entries.len(), "saved collection");
        Ok(())
    }
}

fn recover<T>(policy: ReadPolicy, collection: Collection, err: CatalogError) -> Result<Vec<T>> {
    match policy {
        ReadPolicy::Lenient => {
            tracing::warn!(%collection, error = %err, "unreadable collection, serving it as empty");
            Ok(Vec::new())
        }
        ReadPolicy::Strict => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{NewPastWork, NewProduct, PastWorkItem, Product};
    use chrono::Utc;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> CatalogStore {
        CatalogStore::new(dir.path(), ReadPolicy::Lenient)
    }

    fn product(name: &str) -> Product {
        Product::stamp(NewProduct::new(name, "http://link", "http://video"), "op", Utc::now())
    }

    #[test]
    fn ensure_initialized_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(store.ensure_initialized(Collection::Products).unwrap());
        let content = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn ensure_initialized_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_initialized(Collection::Products).unwrap();
        store.save(&[product("Widget")]).unwrap();
        let before = std::fs::read_to_string(store.path(Collection::Products)).unwrap();

        assert!(!store.ensure_initialized(Collection::Products).unwrap());
        let after = std::fs::read_to_string(store.path(Collection::Products)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn ensure_all_creates_both_documents() {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("nested/data"), ReadPolicy::Lenient);
        store.ensure_all().unwrap();
        assert!(store.path(Collection::Products).exists());
        assert!(store.path(Collection::PastWork).exists());
    }

    #[test]
    fn missing_document_loads_empty() {
        let dir = TempDir::new().unwrap();
        for policy in [ReadPolicy::Lenient, ReadPolicy::Strict] {
            let store = CatalogStore::new(dir.path(), policy);
            assert!(store.load::<Product>().unwrap().is_empty());
        }
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let entries = vec![product("Zeta"), product("Alpha"), product("Mid")];
        store.save(&entries).unwrap();

        let loaded: Vec<Product> = store.load().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn save_of_load_is_a_no_op_on_content() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&[product("One"), product("Two")]).unwrap();
        let before = std::fs::read_to_string(store.path(Collection::Products)).unwrap();

        let loaded: Vec<Product> = store.load().unwrap();
        store.save(&loaded).unwrap();
        let after = std::fs::read_to_string(store.path(Collection::Products)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn saved_document_is_indented() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&[product("Widget")]).unwrap();
        let content = std::fs::read_to_string(store.path(Collection::Products)).unwrap();
        assert!(content.starts_with("[\n  {\n    \"name\": \"Widget\""));
    }

    #[test]
    fn collections_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&[product("Widget")]).unwrap();
        store
            .save(&[PastWorkItem::stamp(NewPastWork::new("Reel", "http://v"), "op", Utc::now())])
            .unwrap();

        assert_eq!(store.load::<Product>().unwrap().len(), 1);
        assert_eq!(store.load::<PastWorkItem>().unwrap()[0].name, "Reel");
    }

    #[test]
    fn corrupt_document_is_empty_when_lenient() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("products.json"), "{ not json").unwrap();
        let store = store(&dir);
        assert!(store.load::<Product>().unwrap().is_empty());
    }

    #[test]
    fn corrupt_document_fails_when_strict() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("products.json"), "{ not json").unwrap();
        let store = CatalogStore::new(dir.path(), ReadPolicy::Strict);
        assert!(matches!(
            store.load::<Product>(),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn unreadable_document_fails_when_strict() {
        let dir = TempDir::new().unwrap();
        // A directory where the document should be cannot be read as a string.
        std::fs::create_dir_all(dir.path().join("past_work.json")).unwrap();
        let strict = CatalogStore::new(dir.path(), ReadPolicy::Strict);
        assert!(matches!(
            strict.load::<PastWorkItem>(),
            Err(CatalogError::StorageUnavailable { .. })
        ));
        let lenient = store(&dir);
        assert!(lenient.load::<PastWorkItem>().unwrap().is_empty());
    }

    #[test]
    fn load_for_update_is_strict_under_lenient_policy() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("products.json"), "{ not json").unwrap();
        let store = store(&dir);
        assert!(store.load::<Product>().unwrap().is_empty());
        assert!(matches!(
            store.load_for_update::<Product>(),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn load_for_update_of_missing_document_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load_for_update::<Product>().unwrap().is_empty());
    }
}
