use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

/// Durable key-value storage. Keys hold opaque string blobs; an absent
/// key reads as `None`. Last write wins across concurrent processes.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;

    fn contains(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// File-per-key storage under a data directory. The directory is created
/// lazily on first write.
#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are storage-internal names, not user input, but keep them
        // to a single path component regardless.
        let name: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(name)
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.key_path(key).exists())
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemStorage {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.map
            .lock()
            .map_err(|_| anyhow::anyhow!("storage mutex poisoned"))
    }
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}
