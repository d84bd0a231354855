use crate::storage::Storage;
use crate::types::Memo;

/// Storage key holding the serialized memo collection.
pub const MEMOS_KEY: &str = "memos";

/// Binds the memo collection to a single storage key. The whole
/// collection is the unit of persistence: `load` parses the full
/// snapshot, `save` rewrites it.
pub struct MemoStore {
    storage: Box<dyn Storage>,
}

impl MemoStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Read the persisted collection. An absent key yields an empty
    /// collection; malformed JSON propagates as a parse error.
    pub fn load(&self) -> anyhow::Result<Vec<Memo>> {
        match self.storage.get(MEMOS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize the whole collection and write it back.
    pub fn save(&self, memos: &[Memo]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(memos)?;
        self.storage.set(MEMOS_KEY, &raw)
    }

    /// Whether a snapshot currently exists in storage.
    pub fn is_persisted(&self) -> anyhow::Result<bool> {
        self.storage.contains(MEMOS_KEY)
    }
}
