//! Snapshot subscribers.
//!
//! The presentation re-renders from the latest [`Snapshot`]. Subscribers
//! are called synchronously, in subscription order, after every
//! transition.

use serde::{Deserialize, Serialize};

use crate::core::Snapshot;

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

type Callback = Box<dyn FnMut(&Snapshot)>;

/// Registered snapshot callbacks.
#[derive(Default)]
pub struct Observers {
    subscribers: Vec<(ObserverId, Callback)>,
    next_id: u32,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn notify(&mut self, snapshot: &Snapshot) {
        for (_, callback) in &mut self.subscribers {
            callback(snapshot);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
