//! Keyed blob storage abstraction. The surrounding application owns the
//! actual persistence mechanics; the engine only reads and writes opaque
//! JSON strings under well-known keys.

/// Key under which the single active applicant profile is persisted.
pub const PROFILE_KEY: &str = "userProfile";

/// Key for a signed-in user's saved-scheme collection.
pub fn saved_schemes_key(user_id: &str) -> String {
    format!("savedSchemes_{user_id}")
}

/// Storage abstraction so the service can be exercised without a real
/// backend. Writes are read-modify-write with last-write-wins semantics;
/// there is no transactional guarantee across keys.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
