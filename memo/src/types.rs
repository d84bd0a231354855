use serde::Deserialize;
use serde::Serialize;

/// Title given to a freshly created memo.
pub const DEFAULT_TITLE: &str = "New memo";

/// Label shown (and used for export filenames) when a title is empty.
pub const UNTITLED_LABEL: &str = "Untitled memo";

/// A single titled note. Serialized with camelCase keys; the persisted
/// collection is a JSON array of these records, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The two user-editable fields of a memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoField {
    Title,
    Content,
}

impl Memo {
    /// New memo stamped at `now_ms` (epoch milliseconds). The id is the
    /// timestamp in decimal; callers ensure uniqueness across a collection.
    pub fn new(now_ms: i64) -> Self {
        Self {
            id: now_ms.to_string(),
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Title to display, falling back to the untitled label when blank.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_LABEL
        } else {
            &self.title
        }
    }
}
