//! Infrastructure implementation of the `ContainerStore` port.
//!
//! `JsonContainerStore` keeps every record in one JSON object keyed by
//! application name. Each operation loads, changes and saves the whole file
//! under two locks: a mutex shared by clones of the store, and an exclusive
//! `flock` on `<store>.lock` for other processes. Writes go through a unique
//! temp file that is renamed over the store.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use fs2::FileExt as _;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::application::ports::ContainerStore;
use crate::domain::ContainerRecord;

type Records = BTreeMap<String, ContainerRecord>;

/// File-backed container store.
#[derive(Clone)]
pub struct JsonContainerStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonContainerStore {
    /// Create a store at the default path (`~/.tsuru/containers.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".tsuru").join("containers.json")))
    }

    /// Create a store with an explicit path.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Exclusive advisory lock held until the returned file is dropped.
    fn lock_file(&self) -> Result<File> {
        let dir = self.dir();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
        let mut lock_path = self.path.clone().into_os_string();
        lock_path.push(".lock");
        let lock_path = PathBuf::from(lock_path);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("opening store lock {}", lock_path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("locking store {}", lock_path.display()))?;
        Ok(file)
    }

    fn load_sync(&self) -> Result<Records> {
        if !self.path.exists() {
            return Ok(Records::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading store {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing store {}", self.path.display()))
    }

    fn save_sync(&self, records: &Records) -> Result<()> {
        let content = serde_json::to_string_pretty(records).context("serializing store")?;

        let dir = self.dir();
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        temp.write_all(content.as_bytes())
            .with_context(|| format!("writing temp file {}", temp.path().display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp.path().display()))?;
        }

        temp.persist(&self.path)
            .with_context(|| format!("finalizing store {}", self.path.display()))?;
        Ok(())
    }

    /// Load, apply `f`, and save if `f` reports a change.
    async fn update<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Records) -> (T, bool) + Send + 'static,
    {
        let _guard = self.lock.lock().await;
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let _lock = store.lock_file()?;
            let mut records = store.load_sync()?;
            let (value, changed) = f(&mut records);
            if changed {
                store.save_sync(&records)?;
            }
            Ok(value)
        })
        .await
        .context("store task panicked")?
    }
}

impl ContainerStore for JsonContainerStore {
    async fn insert(&self, record: &ContainerRecord) -> Result<()> {
        let record = record.clone();
        self.update(move |records| {
            records.insert(record.name.clone(), record);
            ((), true)
        })
        .await
    }

    async fn get(&self, name: &str) -> Result<Option<ContainerRecord>> {
        let name = name.to_string();
        self.update(move |records| (records.remove(&name), false))
            .await
    }

    async fn remove(&self, name: &str) -> Result<bool> {
        let name = name.to_string();
        self.update(move |records| {
            let existed = records.remove(&name).is_some();
            (existed, existed)
        })
        .await
    }

    async fn list(&self) -> Result<Vec<ContainerRecord>> {
        self.update(|records| (std::mem::take(records).into_values().collect(), false))
            .await
    }
}
