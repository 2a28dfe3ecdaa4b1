use std::collections::HashMap;

use crate::error::CanvasError;
use crate::Result;

/// What an account store keeps per identifier, never a plain password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub user_id: u64,
    pub name: String,
    /// PHC string, carries its own salt and cost parameters
    pub password_hash: String,
}

/// Keyed record store for accounts, the identifier is usually an email address.
pub trait CredentialStore {
    fn lookup(&self, identifier: &str) -> Result<Option<CredentialRecord>>;

    /// stores a new record and returns its user id, identifiers are unique
    fn store(&mut self, identifier: &str, name: &str, password_hash: &str) -> Result<u64>;
}

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    last_user_id: u64,
    records: HashMap<String, CredentialRecord>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn lookup(&self, identifier: &str) -> Result<Option<CredentialRecord>> {
        Ok(self.records.get(identifier).cloned())
    }

    fn store(&mut self, identifier: &str, name: &str, password_hash: &str) -> Result<u64> {
        if self.records.contains_key(identifier) {
            return Err(CanvasError::AccountExists);
        }
        self.last_user_id += 1;
        self.records.insert(
            identifier.to_string(),
            CredentialRecord {
                user_id: self.last_user_id,
                name: name.to_string(),
                password_hash: password_hash.to_string(),
            },
        );

        Ok(self.last_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_store_and_lookup() {
        let mut store = MemoryCredentialStore::new();
        let id = store.store("ada@example.org", "Ada", "$argon2id$...").unwrap();

        let record = store.lookup("ada@example.org").unwrap().unwrap();
        assert_eq!(record.user_id, id);
        assert_eq!(record.name, "Ada");
        assert_eq!(record.password_hash, "$argon2id$...");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_hand_out_increasing_ids() {
        let mut store = MemoryCredentialStore::new();

        assert_eq!(store.store("a", "A", "h").unwrap(), 1);
        assert_eq!(store.store("b", "B", "h").unwrap(), 2);
    }

    #[test]
    fn should_refuse_duplicate_identifiers() {
        let mut store = MemoryCredentialStore::new();
        store.store("a", "A", "h").unwrap();

        assert!(matches!(
            store.store("a", "Other", "h2"),
            Err(CanvasError::AccountExists)
        ));
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(MemoryCredentialStore::new().lookup("nobody").unwrap().is_none());
    }
}
