//! Observable value container.
//!
//! A `Store` owns one value and a list of subscribers. Every mutation goes
//! through [`Store::update`], which notifies all subscribers synchronously
//! before returning, so any reader that depends on the value is stale the
//! moment a setter completes.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Single-writer value holder with change notification.
pub struct Store<T> {
    value: T,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self { value, next_id: 0, subscribers: Vec::new() }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutate the value in place, then notify subscribers in subscription order.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Register a callback invoked with the new value after every update.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
