use std::{collections::HashMap, sync::Mutex};

use anyhow::{anyhow, Result};

use super::KeyValueStore;

/// Store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|e| anyhow!("{e}"))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|e| anyhow!("{e}"))?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
