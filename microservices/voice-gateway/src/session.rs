//! Most recent browser identity
//!
//! One process-wide slot, written by every token request and read by every
//! voice webhook. The lock prevents data races only: concurrent token
//! requests still overwrite each other, and a webhook may see another
//! caller's identity or the empty string before the first token request.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct IdentitySlot {
    inner: Arc<Mutex<String>>,
}

impl IdentitySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `identity`, returning the one it displaced
    pub fn replace(&self, identity: String) -> String {
        std::mem::replace(&mut *self.inner.lock(), identity)
    }

    pub fn current(&self) -> String {
        self.inner.lock().clone()
    }
}
