use std::collections::HashMap;

use serde_json::Value;

use crate::errors::StorageError;

/// Almacén de configuraciones serializadas, por herramienta (`scope`) e
/// identidad (`Default`, `Default.NamingConfig`, ...).
pub trait ConfigStore {
    /// `Ok(None)` si la identidad nunca se guardó.
    fn load(&self, scope: &str, identity: &str) -> Result<Option<Value>, StorageError>;
    fn save(&mut self, scope: &str, identity: &str, value: &Value) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    pub inner: HashMap<(String, String), Value>,
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self, scope: &str, identity: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.inner.get(&(scope.to_string(), identity.to_string())).cloned())
    }

    fn save(&mut self, scope: &str, identity: &str, value: &Value) -> Result<(), StorageError> {
        self.inner.insert((scope.to_string(), identity.to_string()), value.clone());
        Ok(())
    }
}
