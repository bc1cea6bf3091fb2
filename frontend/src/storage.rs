use shared::constants::SESSION_STORAGE_KEY;
use shared::store::{RecordSlot, StoreError};
use web_sys::{window, Storage};

/// The visitor's session record in `localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl RecordSlot for LocalStorageSlot {
    fn read(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(SESSION_STORAGE_KEY).ok().flatten())
    }

    fn write(&mut self, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(SESSION_STORAGE_KEY, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }

    fn clear(&mut self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
