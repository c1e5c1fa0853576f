//! Observable, append-only store of the conversation's messages.
//!
//! Every append republishes the full sequence to all subscribers. Delivery is
//! latest-value only: a subscriber that reads late sees the newest sequence,
//! never a backlog. Messages are shared between emissions, so a republish
//! copies pointers and never bodies.

use std::sync::Arc;

use tokio::sync::watch;

use super::message::Message;

/// One emission: the full ordered sequence at the time of the change.
pub type MessageSequence = Arc<[Arc<Message>]>;

#[derive(Debug)]
pub struct MessageStore {
    messages: Vec<Arc<Message>>,
    publisher: watch::Sender<MessageSequence>,
}

impl Default for MessageStore {
    fn default() -> Self {
        let (publisher, _) = watch::channel(MessageSequence::from(Vec::new()));
        Self {
            messages: Vec::new(),
            publisher,
        }
    }
}

impl MessageStore {
    /// Appends a message and pushes the new sequence to every subscriber.
    ///
    /// Accepts any author and body, including empty strings. Validation is the
    /// caller's concern.
    pub fn append(&mut self, author: impl Into<String>, body: impl Into<String>) {
        self.messages.push(Arc::new(Message::new(author, body)));

        let sequence = MessageSequence::from(self.messages.as_slice());
        self.publisher.send_replace(sequence);

        tracing::debug!(
            len = self.messages.len(),
            subscribers = self.publisher.receiver_count(),
            "message appended"
        );
    }

    pub fn subscribe(&self) -> MessageFeed {
        MessageFeed {
            receiver: self.publisher.subscribe(),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn messages(&self) -> &[Arc<Message>] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Subscription handle returned by [`MessageStore::subscribe`].
#[derive(Debug)]
pub struct MessageFeed {
    receiver: watch::Receiver<MessageSequence>,
}

impl MessageFeed {
    /// Returns the newest sequence if an emission happened since the last read.
    ///
    /// Returns `None` when nothing changed or the store is gone. An emission
    /// still unread when the store is dropped is not reported here; only
    /// [`MessageFeed::latest`] can reach it.
    pub fn next(&mut self) -> Option<MessageSequence> {
        match self.receiver.has_changed() {
            Ok(true) => Some(Arc::clone(&*self.receiver.borrow_and_update())),
            Ok(false) | Err(_) => None,
        }
    }

    /// Returns the current sequence without marking it as read.
    pub fn latest(&self) -> MessageSequence {
        Arc::clone(&*self.receiver.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(sequence: &MessageSequence) -> Vec<&str> {
        sequence.iter().map(|message| message.body()).collect()
    }

    #[test]
    fn new_store_is_empty_and_feed_has_no_emission() {
        let store = MessageStore::default();
        let mut feed = store.subscribe();

        assert!(store.is_empty());
        assert!(feed.next().is_none());
        assert!(feed.latest().is_empty());
    }

    #[test]
    fn append_keeps_call_order_and_counts() {
        let mut store = MessageStore::default();

        for body in ["one", "two", "three", "four"] {
            store.append("Me", body);
        }

        assert_eq!(store.len(), 4);
        let order: Vec<&str> = store.messages().iter().map(|m| m.body()).collect();
        assert_eq!(order, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn append_publishes_single_message_sequence() {
        let mut store = MessageStore::default();
        let mut feed = store.subscribe();

        store.append("Me", "hi");

        let sequence = feed.next().expect("append must emit");
        assert_eq!(&*sequence, &[Arc::new(Message::new("Me", "hi"))]);
    }

    #[test]
    fn store_accepts_empty_body_without_validation() {
        let mut store = MessageStore::default();
        store.append("Me", "hi");

        store.append("Me", "");

        assert_eq!(store.len(), 2);
        assert!(store.messages()[1].is_blank());
    }

    #[test]
    fn each_append_emits_the_cumulative_sequence() {
        let mut store = MessageStore::default();
        let mut feed = store.subscribe();
        let mut emissions = Vec::new();

        for body in ["a", "b", "c"] {
            store.append("Me", body);
            emissions.push(feed.next().expect("every append must emit"));
        }

        assert_eq!(emissions.len(), 3);
        assert_eq!(bodies(&emissions[0]), vec!["a"]);
        assert_eq!(bodies(&emissions[1]), vec!["a", "b"]);
        assert_eq!(bodies(&emissions[2]), vec!["a", "b", "c"]);
    }

    #[test]
    fn late_reader_only_sees_latest_emission() {
        let mut store = MessageStore::default();
        let mut feed = store.subscribe();

        store.append("Me", "a");
        store.append("Me", "b");
        store.append("Me", "c");

        let latest = feed.next().expect("pending emission expected");
        assert_eq!(bodies(&latest), vec!["a", "b", "c"]);
        assert!(feed.next().is_none());
    }

    #[test]
    fn subscribers_share_the_same_sequence_reference() {
        let mut store = MessageStore::default();
        let mut first = store.subscribe();
        let mut second = store.subscribe();

        store.append("Me", "shared");

        let a = first.next().expect("first subscriber must see emission");
        let b = second.next().expect("second subscriber must see emission");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn late_subscriber_reads_current_sequence_through_latest() {
        let mut store = MessageStore::default();
        store.append("Me", "before");

        let mut feed = store.subscribe();

        assert!(feed.next().is_none());
        assert_eq!(bodies(&feed.latest()), vec!["before"]);
    }

    #[test]
    fn feed_goes_quiet_after_store_is_dropped() {
        let mut store = MessageStore::default();
        let mut feed = store.subscribe();
        store.append("Me", "last");
        let _ = feed.next();

        drop(store);

        assert!(feed.next().is_none());
        assert_eq!(bodies(&feed.latest()), vec!["last"]);
    }

    #[test]
    fn republish_shares_earlier_messages_instead_of_copying() {
        let mut store = MessageStore::default();
        let mut feed = store.subscribe();

        store.append("Me", "first");
        let before = feed.next().expect("first append must emit");
        store.append("Me", "second");
        let after = feed.next().expect("second append must emit");

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&after[0], &store.messages()[0]));
    }

    #[test]
    fn unread_emission_is_lost_to_next_once_store_is_dropped() {
        let mut store = MessageStore::default();
        let mut feed = store.subscribe();
        store.append("Me", "pending");

        drop(store);

        assert!(feed.next().is_none());
        assert_eq!(bodies(&feed.latest()), vec!["pending"]);
    }
}
