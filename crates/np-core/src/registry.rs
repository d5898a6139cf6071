//! Fault registry: the out-of-band channel for trap messages.
//!
//! A trap cannot carry an arbitrary payload across the module boundary, so
//! the embedded runtime publishes the human-readable panic message into a
//! registry right before it traps, and the classifier takes it right after.
//!
//! Each embedded-module instance owns its own [`FaultRegistry`]. Instances
//! running concurrently must not share one, or a message may be attributed to
//! the wrong trap.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where the diagnostic extractor reads a trap message from.
pub trait FaultSource {
    /// Take the last published message, leaving the source empty.
    fn take_message(&self) -> Option<String>;
}

impl<F> FaultSource for F
where
    F: Fn() -> Option<String>,
{
    fn take_message(&self) -> Option<String> {
        (self)()
    }
}

/// Single-slot registry shared between an embedded runtime and its caller.
///
/// Clones are handles to the same slot: hand one to the runtime at setup
/// time and keep one for classification.
#[derive(Debug, Clone, Default)]
pub struct FaultRegistry {
    slot: Arc<Mutex<Option<String>>>,
}

impl FaultRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a panic message, replacing any previous one.
    pub fn publish(&self, message: impl Into<String>) {
        *self.lock() = Some(message.into());
    }

    /// Take the current message, emptying the slot.
    pub fn take(&self) -> Option<String> {
        self.lock().take()
    }

    /// Look at the current message without consuming it.
    pub fn peek(&self) -> Option<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    // A writer that panicked mid-publish still left a complete Option behind.
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FaultSource for FaultRegistry {
    fn take_message(&self) -> Option<String> {
        self.take()
    }
}
