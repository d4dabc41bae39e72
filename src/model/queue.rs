//! Bounded FIFO message queue.

use crate::core::Message;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Per-participant FIFO buffer of fixed capacity.
///
/// A capacity of zero means the participant has no queue at all: the buffer
/// is absent and every enqueue fails. Operations never block; a failed
/// operation simply leaves the queue untouched.
///
/// Equality and hashing look at the capacity and the ordered sequence of
/// message names only, ignoring direction tags.
///
/// # Example
///
/// ```rust
/// use hybrid_system_behavior::core::Message;
/// use hybrid_system_behavior::model::MessageQueue;
///
/// let mut queue = MessageQueue::new(1);
/// assert!(queue.try_enqueue(Message::output("m1")));
/// assert!(!queue.try_enqueue(Message::output("m2")));
///
/// assert_eq!(queue.peek_head_name(), Some("m1"));
/// assert!(!queue.try_dequeue_if_head_matches("m2"));
/// assert!(queue.try_dequeue_if_head_matches("m1"));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageQueue {
    capacity: usize,
    buffer: Option<VecDeque<Message>>,
}

impl MessageQueue {
    /// Create an empty queue; no buffer is allocated for capacity zero.
    pub fn new(capacity: usize) -> Self {
        let buffer = (capacity > 0).then(VecDeque::new);
        Self { capacity, buffer }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the participant can receive asynchronously at all.
    pub fn is_enabled(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Buffered messages from head to tail.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.buffer.iter().flatten()
    }

    /// Append `message` at the tail.
    /// Returns `false` without touching the queue when it is absent or full.
    pub fn try_enqueue(&mut self, message: Message) -> bool {
        match self.buffer.as_mut() {
            Some(buffer) if buffer.len() < self.capacity => {
                buffer.push_back(message);
                true
            }
            _ => false,
        }
    }

    /// Remove the head if its name is `name`.
    /// Returns `false` without touching the queue when it is absent, empty, or
    /// headed by another message.
    pub fn try_dequeue_if_head_matches(&mut self, name: &str) -> bool {
        let Some(buffer) = self.buffer.as_mut() else {
            return false;
        };
        if buffer.front().is_some_and(|head| head.name() == name) {
            buffer.pop_front();
            true
        } else {
            false
        }
    }

    pub fn peek_head_name(&self) -> Option<&str> {
        self.buffer
            .as_ref()
            .and_then(VecDeque::front)
            .map(Message::name)
    }
}

impl PartialEq for MessageQueue {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.buffer.is_some() == other.buffer.is_some()
            && self.len() == other.len()
            && self
                .messages()
                .zip(other.messages())
                .all(|(left, right)| left.same_name(right))
    }
}

impl Eq for MessageQueue {}

impl Hash for MessageQueue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.buffer.is_some().hash(state);
        self.len().hash(state);
        for message in self.messages() {
            message.name().hash(state);
        }
    }
}

impl fmt::Display for MessageQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, message) in self.messages().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            f.write_str(message.name())?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(queue: &MessageQueue) -> u64 {
        let mut hasher = DefaultHasher::new();
        queue.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn zero_capacity_has_no_buffer() {
        let mut queue = MessageQueue::new(0);

        assert!(!queue.is_enabled());
        assert!(!queue.try_enqueue(Message::output("m1")));
        assert!(!queue.try_dequeue_if_head_matches("m1"));
        assert_eq!(queue.peek_head_name(), None);
        assert_eq!(queue.to_string(), "[]");
    }

    #[test]
    fn enqueue_respects_capacity() {
        let mut queue = MessageQueue::new(2);

        assert!(queue.try_enqueue(Message::output("m1")));
        assert!(queue.try_enqueue(Message::output("m2")));
        assert!(queue.is_full());
        assert!(!queue.try_enqueue(Message::output("m3")));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.to_string(), "[m1, m2]");
    }

    #[test]
    fn dequeue_preserves_fifo_order() {
        let mut queue = MessageQueue::new(3);
        queue.try_enqueue(Message::output("m1"));
        queue.try_enqueue(Message::output("m2"));
        queue.try_enqueue(Message::output("m3"));

        assert!(!queue.try_dequeue_if_head_matches("m2"));
        assert_eq!(queue.len(), 3);

        assert!(queue.try_dequeue_if_head_matches("m1"));
        let names: Vec<_> = queue.messages().map(Message::name).collect();
        assert_eq!(names, vec!["m2", "m3"]);
    }

    #[test]
    fn dequeue_from_empty_queue_fails() {
        let mut queue = MessageQueue::new(1);
        assert!(!queue.try_dequeue_if_head_matches("m1"));
    }

    #[test]
    fn equality_ignores_direction() {
        let mut sent = MessageQueue::new(2);
        sent.try_enqueue(Message::output("m1"));

        let mut received = MessageQueue::new(2);
        received.try_enqueue(Message::input("m1"));

        assert_eq!(sent, received);
        assert_eq!(hash_of(&sent), hash_of(&received));
    }

    #[test]
    fn equality_considers_capacity_and_order() {
        let mut first = MessageQueue::new(2);
        first.try_enqueue(Message::output("m1"));
        first.try_enqueue(Message::output("m2"));

        let mut reversed = MessageQueue::new(2);
        reversed.try_enqueue(Message::output("m2"));
        reversed.try_enqueue(Message::output("m1"));

        assert_ne!(first, reversed);
        assert_ne!(MessageQueue::new(1), MessageQueue::new(2));
        assert_eq!(MessageQueue::new(0), MessageQueue::new(0));
    }

    #[test]
    fn clones_do_not_alias() {
        let mut original = MessageQueue::new(2);
        original.try_enqueue(Message::output("m1"));

        let mut copy = original.clone();
        copy.try_enqueue(Message::output("m2"));

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
