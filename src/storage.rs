//! Task Persistence
//!
//! Storage port consumed by the view model, plus the localStorage and
//! in-memory adapters. Tasks are stored as one JSON array under one key.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::models::TaskList;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors. None of these reach the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
            StorageError::Encode(msg) => write!(f, "Encode failed: {}", msg),
            StorageError::Decode(msg) => write!(f, "Decode failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// ========================
// Codec
// ========================

pub fn encode_tasks(tasks: &TaskList) -> StorageResult<String> {
    serde_json::to_string(tasks).map_err(|e| StorageError::Encode(e.to_string()))
}

/// Decode the persisted array. A stored `null` counts as an empty list.
pub fn decode_tasks(raw: &str) -> StorageResult<TaskList> {
    let parsed: Option<TaskList> =
        serde_json::from_str(raw).map_err(|e| StorageError::Decode(e.to_string()))?;
    Ok(parsed.unwrap_or_default())
}

// ========================
// Port
// ========================

/// Key-value slot holding the serialized task list.
///
/// Adapters implement the raw string access; `load` and `save` never fail
/// towards the caller.
pub trait TaskStorage {
    /// Raw stored value, `None` when nothing has been saved yet
    fn read_raw(&self) -> StorageResult<Option<String>>;

    fn write_raw(&self, value: &str) -> StorageResult<()>;

    /// Load the persisted list, falling back to empty on any problem
    fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(Some(tasks)) => {
                log::debug!(target: "STORAGE", "Loaded {} tasks", tasks.len());
                tasks
            }
            Ok(None) => {
                log::debug!(target: "STORAGE", "No saved tasks, starting empty");
                TaskList::new()
            }
            Err(e) => {
                log::warn!(target: "STORAGE", "Ignoring saved tasks: {}", e);
                TaskList::new()
            }
        }
    }

    fn try_load(&self) -> StorageResult<Option<TaskList>> {
        match self.read_raw()? {
            Some(raw) => decode_tasks(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Best-effort write of the whole list
    fn save(&self, tasks: &TaskList) {
        if let Err(e) = self.try_save(tasks) {
            log::error!(target: "STORAGE", "Failed to save {} tasks: {}", tasks.len(), e);
        }
    }

    fn try_save(&self, tasks: &TaskList) -> StorageResult<()> {
        let raw = encode_tasks(tasks)?;
        self.write_raw(&raw)
    }
}

// ========================
// Adapters
// ========================

/// `window.localStorage` under a single key
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn local_storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TaskStorage for BrowserStorage {
    fn read_raw(&self) -> StorageResult<Option<String>> {
        self.local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write_raw(&self, value: &str) -> StorageResult<()> {
        self.local_storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory slot. Clones share the same slot, so a clone kept aside can
/// observe what the view model wrote.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl TaskStorage for MemoryStorage {
    fn read_raw(&self) -> StorageResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write_raw(&self, value: &str) -> StorageResult<()> {
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
