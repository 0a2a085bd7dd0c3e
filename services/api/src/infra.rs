use metrics_exporter_prometheus::PrometheusHandle;
use scheme_advisor::error::AppError;
use scheme_advisor::schemes::{SchemeCatalog, StateStore, StoreError};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

/// Default catalog shipped with the binary; a deployment can point
/// `APP_CATALOG_PATH` at its own file instead.
const EMBEDDED_CATALOG: &str = include_str!("../data/schemes.json");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local keyed blob store. The engine only needs get/put on opaque
/// JSON strings, so a mutexed map is a full implementation.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStateStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .values
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}

pub(crate) fn default_catalog() -> Result<SchemeCatalog, AppError> {
    Ok(SchemeCatalog::from_json(EMBEDDED_CATALOG)?)
}

pub(crate) fn catalog_from_path(path: &Path) -> Result<SchemeCatalog, AppError> {
    let file = File::open(path)?;
    Ok(SchemeCatalog::from_reader(file)?)
}
