use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;

/// Asks the user before a destructive call (modal or native confirm).
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

/// Ids whose mutation is still in flight; their controls stay disabled.
#[derive(Clone, Default)]
pub struct InFlight {
    pending: Arc<Mutex<HashSet<i64>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when a request for `id` is already pending.
    pub fn try_begin(&self, id: i64) -> Option<InFlightGuard> {
        let mut pending = self.pending.lock().ok()?;
        if !pending.insert(id) {
            return None;
        }
        Some(InFlightGuard {
            pending: self.pending.clone(),
            id,
        })
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending
            .lock()
            .map(|pending| pending.contains(&id))
            .unwrap_or(false)
    }
}

pub struct InFlightGuard {
    pending: Arc<Mutex<HashSet<i64>>>,
    id: i64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.remove(&self.id);
        }
    }
}

/// Per-step result of a sequential best-effort cascade delete.
#[derive(Debug, Default)]
pub struct CascadeReport {
    pub deleted_children: Vec<i64>,
    pub failed_children: Vec<(i64, ApiError)>,
}

impl CascadeReport {
    pub fn attempted(&self) -> usize {
        self.deleted_children.len() + self.failed_children.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_children.is_empty()
    }
}
