//! Typed change notifications.
//!
//! The browser original broadcast a bare `storage` event after every
//! mutation, leaving every mounted view to re-read both collections. Here the
//! stores share an explicit [`ChangeNotifier`]: subscribers are told exactly
//! which collection changed, and subscriptions can be dropped
//! deterministically.
//!
//! Notification is best-effort and synchronous - callbacks run on the
//! mutating thread before the store operation returns.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Which persisted collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Cart,
    Wishlist,
}

/// Handle identifying a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(Collection) + Send + Sync>;

/// Registry of change subscribers shared by the cart and wishlist stores.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_id: AtomicU64,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked after every persisted mutation.
    pub fn subscribe(&self, callback: impl Fn(Collection) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Notify every subscriber that `collection` changed.
    pub(crate) fn notify(&self, collection: Collection) {
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, callback) in subscribers.iter() {
            callback(collection);
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &count)
            .finish()
    }
}
