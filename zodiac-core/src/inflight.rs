//! Per-action re-entrancy guard.
//!
//! Each action moves `Idle -> Pending -> Idle`; a second trigger while the
//! action is pending is dropped rather than queued.

use crate::resources::ResourceKind;
use crate::schema::RunAction;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTag {
    Toggle,
    Delete,
    Submit,
    Reschedule,
    Run(RunAction),
    Moderate { user_id: i64 },
    RemoveTicket { user_id: i64 },
}

/// Identity of one user-triggerable action on one resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionId {
    pub kind: ResourceKind,
    pub key: String,
    pub tag: ActionTag,
}

impl ActionId {
    #[must_use]
    pub fn new(kind: ResourceKind, key: impl Into<String>, tag: ActionTag) -> Self {
        Self {
            kind,
            key: key.into(),
            tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Idle,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InFlight {
    pending: HashSet<ActionId>,
}

impl InFlight {
    /// Move `id` to pending. Returns `false` when it already was.
    pub fn try_begin(&mut self, id: &ActionId) -> bool {
        self.pending.insert(id.clone())
    }

    pub fn finish(&mut self, id: &ActionId) {
        self.pending.remove(id);
    }

    #[must_use]
    pub fn state(&self, id: &ActionId) -> ActionState {
        if self.pending.contains(id) {
            ActionState::Pending
        } else {
            ActionState::Idle
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: &ActionId) -> bool {
        self.state(id) == ActionState::Pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionId> {
        self.pending.iter()
    }
}
