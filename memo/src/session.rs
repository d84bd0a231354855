use chrono::Utc;

use crate::store::MemoStore;
use crate::types::Memo;
use crate::types::MemoField;

/// In-memory view-model: the memo collection plus a single selection,
/// write-through to the store on every mutation.
///
/// At most one memo is active at a time; the active id is either `None`
/// or the id of an existing memo. New memos are prepended, so the
/// collection stays newest-first by construction.
pub struct Session {
    store: MemoStore,
    memos: Vec<Memo>,
    active_id: Option<String>,
}

impl Session {
    /// Read the persisted collection once and start with no selection.
    pub fn load(store: MemoStore) -> anyhow::Result<Self> {
        let memos = store.load()?;
        Ok(Self {
            store,
            memos,
            active_id: None,
        })
    }

    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The currently selected memo, if any.
    pub fn active(&self) -> Option<&Memo> {
        let id = self.active_id.as_deref()?;
        self.memos.iter().find(|m| m.id == id)
    }

    /// Create a memo stamped with the current time, prepend and select it.
    pub fn create(&mut self) -> anyhow::Result<&Memo> {
        self.create_at(Utc::now().timestamp_millis())
    }

    /// Create a memo stamped at `now_ms`. Ids derive from the timestamp;
    /// when the millisecond collides with an existing id the candidate is
    /// bumped until unique, so rapid successive creates stay distinct.
    pub fn create_at(&mut self, now_ms: i64) -> anyhow::Result<&Memo> {
        let mut stamp = now_ms;
        while self.memos.iter().any(|m| m.id == stamp.to_string()) {
            stamp += 1;
        }
        let memo = Memo::new(stamp);
        self.active_id = Some(memo.id.clone());
        self.memos.insert(0, memo);
        self.persist()?;
        Ok(&self.memos[0])
    }

    /// Set the active id. Selecting an id that no longer exists resets
    /// the selection to none.
    pub fn select(&mut self, id: &str) {
        if self.memos.iter().any(|m| m.id == id) {
            self.active_id = Some(id.to_string());
        } else {
            self.active_id = None;
        }
    }

    /// Overwrite one field of the active memo and refresh its
    /// modification timestamp. No-op when nothing is active.
    pub fn update_active(&mut self, field: MemoField, value: &str) -> anyhow::Result<()> {
        self.update_active_at(field, value, Utc::now().timestamp_millis())
    }

    pub fn update_active_at(
        &mut self,
        field: MemoField,
        value: &str,
        now_ms: i64,
    ) -> anyhow::Result<()> {
        let Some(id) = self.active_id.clone() else {
            return Ok(());
        };
        let Some(memo) = self.memos.iter_mut().find(|m| m.id == id) else {
            return Ok(());
        };
        match field {
            MemoField::Title => memo.title = value.to_string(),
            MemoField::Content => memo.content = value.to_string(),
        }
        memo.updated_at = now_ms;
        self.persist()
    }

    /// Remove one memo by id, clearing the selection if it was active.
    pub fn delete(&mut self, id: &str) -> anyhow::Result<()> {
        self.memos.retain(|m| m.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.persist()
    }

    /// Remove every memo and clear the selection. Gated on explicit
    /// confirmation: declining leaves the collection untouched. Returns
    /// whether anything happened.
    pub fn delete_all(&mut self, confirmed: bool) -> anyhow::Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.memos.clear();
        self.active_id = None;
        self.persist()?;
        Ok(true)
    }

    /// Write-through after a mutation. An empty collection is not written
    /// to absent storage, so a fresh session never clobbers a missing
    /// snapshot with an empty one; once a snapshot exists, empties are
    /// persisted normally.
    fn persist(&self) -> anyhow::Result<()> {
        if self.memos.is_empty() && !self.store.is_persisted()? {
            return Ok(());
        }
        self.store.save(&self.memos)
    }
}
