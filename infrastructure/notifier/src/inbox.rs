use std::collections::VecDeque;
use std::sync::Mutex;

use business::domain::cart::notification::{CartNotification, NotificationSink};

pub const DEFAULT_INBOX_CAPACITY: usize = 50;

/// Bounded queue of pending cart notifications, drained by the presentation
/// layer. When full the oldest notification is dropped.
#[derive(Debug)]
pub struct InboxNotifier {
    pending: Mutex<VecDeque<CartNotification>>,
    capacity: usize,
}

impl InboxNotifier {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<CartNotification> {
        match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InboxNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_INBOX_CAPACITY)
    }
}

impl NotificationSink for InboxNotifier {
    fn notify(&self, notification: CartNotification) {
        let Ok(mut pending) = self.pending.lock() else {
            tracing::warn!("notification inbox unavailable, dropping: {}", notification.title);
            return;
        };

        if pending.len() >= self.capacity
            && let Some(dropped) = pending.pop_front()
        {
            tracing::debug!("notification inbox full, dropped: {}", dropped.title);
        }
        pending.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::notification::CartEvent;

    fn cleared(items_removed: usize) -> CartNotification {
        CartNotification::from(CartEvent::Cleared { items_removed })
    }

    #[test]
    fn should_drain_in_arrival_order() {
        let inbox = InboxNotifier::new(10);
        inbox.notify(cleared(1));
        inbox.notify(cleared(2));

        let drained = inbox.drain();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].event, CartEvent::Cleared { items_removed: 1 });
        assert!(inbox.is_empty());
    }

    #[test]
    fn should_drop_oldest_when_full() {
        let inbox = InboxNotifier::new(2);
        inbox.notify(cleared(1));
        inbox.notify(cleared(2));
        inbox.notify(cleared(3));

        let drained = inbox.drain();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].event, CartEvent::Cleared { items_removed: 2 });
        assert_eq!(drained[1].event, CartEvent::Cleared { items_removed: 3 });
    }

    #[test]
    fn should_treat_zero_capacity_as_one() {
        let inbox = InboxNotifier::new(0);
        inbox.notify(cleared(1));
        inbox.notify(cleared(2));

        assert_eq!(inbox.len(), 1);
    }
}
