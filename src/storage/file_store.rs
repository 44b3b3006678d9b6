use std::{io::ErrorKind, path::PathBuf};

use anyhow::Result;
use tokio::fs::File;
use tracing::debug;

use crate::fs::operations::{overwrite_locked, read_locked};

use super::KeyValueStore;

/// Keeps every key in its own `<key>.json` file inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        debug!("Reading {path:?}");
        let mut file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(read_locked(&mut file).await?))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        debug!("Writing {} bytes into {path:?}", value.len());
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .await?;
        overwrite_locked(&mut file, value.as_bytes()).await?;
        Ok(())
    }
}
