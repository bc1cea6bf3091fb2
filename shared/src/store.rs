use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable,
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Storage unavailable"),
            Self::Write(e) => write!(f, "Storage write failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// A single durable key holding one visitor's serialized session record.
pub trait RecordSlot {
    fn read(&self) -> Option<String>;
    fn write(&mut self, value: &str) -> Result<(), StoreError>;
    fn clear(&mut self);
}

/// In-memory slot. Clones share the same cell, so a test can keep a handle
/// and inspect what the controller persisted.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.into()))),
        }
    }
}

impl RecordSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&mut self, value: &str) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) {
        self.value.borrow_mut().take();
    }
}
