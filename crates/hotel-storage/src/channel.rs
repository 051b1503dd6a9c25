use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A storage change made outside the current page (another tab).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    /// `None` when the whole store was cleared
    pub key: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    pub fn set(key: impl Into<String>, new_value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            old_value: None,
            new_value: Some(new_value.into()),
        }
    }

    pub fn removed(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            old_value: None,
            new_value: None,
        }
    }

    pub fn cleared() -> Self {
        Self {
            key: None,
            old_value: None,
            new_value: None,
        }
    }
}

type Listener = Box<dyn FnMut(&StorageChange)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    /// Unsubscribed while `publish` had the entries checked out
    removed: Vec<u64>,
}

/// Storage-change notification channel.
///
/// Environments with native cross-tab events forward them through
/// `publish`; elsewhere nothing is ever published and subscribers simply
/// never fire.
#[derive(Clone, Default)]
pub struct StorageChannel {
    listeners: Rc<RefCell<Listeners>>,
}

impl StorageChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays active until the returned guard is dropped.
    pub fn subscribe(&self, listener: impl FnMut(&StorageChange) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver `change` to every listener, in subscription order.
    pub fn publish(&self, change: &StorageChange) {
        // Listeners are taken out while running so one may subscribe or
        // drop its own subscription without a double borrow.
        let mut running = std::mem::take(&mut self.listeners.borrow_mut().entries);
        for (_, listener) in running.iter_mut() {
            listener(change);
        }
        let mut listeners = self.listeners.borrow_mut();
        let removed = std::mem::take(&mut listeners.removed);
        running.retain(|(id, _)| !removed.contains(id));
        let added = std::mem::take(&mut listeners.entries);
        listeners.entries = running;
        listeners.entries.extend(added);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let mut listeners = listeners.borrow_mut();
            let before = listeners.entries.len();
            listeners.entries.retain(|(id, _)| *id != self.id);
            if listeners.entries.len() == before {
                // Not found: it is currently running inside `publish`.
                listeners.removed.push(self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_subscribers_in_order() {
        let channel = StorageChannel::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        let _a = channel.subscribe(move |c| first.borrow_mut().push(format!("a:{:?}", c.key)));
        let second = seen.clone();
        let _b = channel.subscribe(move |c| second.borrow_mut().push(format!("b:{:?}", c.key)));

        channel.publish(&StorageChange::removed("isLoggedIn"));

        assert_eq!(
            *seen.borrow(),
            vec![
                "a:Some(\"isLoggedIn\")".to_string(),
                "b:Some(\"isLoggedIn\")".to_string()
            ]
        );
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let channel = StorageChannel::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = hits.clone();
        let subscription = channel.subscribe(move |_| *counter.borrow_mut() += 1);
        channel.publish(&StorageChange::cleared());
        drop(subscription);
        channel.publish(&StorageChange::cleared());

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_subscribe_during_publish() {
        let channel = StorageChannel::new();
        let inner_channel = channel.clone();
        let held = Rc::new(RefCell::new(Vec::new()));

        let holder = held.clone();
        let _outer = channel.subscribe(move |_| {
            holder.borrow_mut().push(inner_channel.subscribe(|_| {}));
        });
        channel.publish(&StorageChange::set("userName", "Ana"));

        assert_eq!(channel.listener_count(), 2);
    }
}
