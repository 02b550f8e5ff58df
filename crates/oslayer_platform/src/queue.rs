//! FIFO event queue
//!
//! Producers (the translator) append during a pump; the application drains
//! afterwards. The queue applies no coalescing, deduplication or priority.

use crate::event::Event;
use std::collections::vec_deque;
use std::collections::VecDeque;

/// Ordered buffer of pending events
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the tail
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Take the oldest pending event
    pub fn poll(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Take every pending event in FIFO order
    ///
    /// Events not consumed from the iterator are still removed when it drops.
    pub fn drain(&mut self) -> vec_deque::Drain<'_, Event> {
        self.events.drain(..)
    }

    /// Peek at the pending events without removing them
    pub fn iter(&self) -> vec_deque::Iter<'_, Event> {
        self.events.iter()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are pending
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard every pending event
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DeviceId;

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.push(Event::JoystickAdded(DeviceId(0)));
        queue.push(Event::JoystickAdded(DeviceId(1)));
        queue.push(Event::Quit);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.poll(), Some(Event::JoystickAdded(DeviceId(0))));

        let rest: Vec<_> = queue.drain().collect();
        assert_eq!(rest, vec![Event::JoystickAdded(DeviceId(1)), Event::Quit]);
        assert!(queue.is_empty());
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn test_no_coalescing() {
        let mut queue = EventQueue::new();
        queue.push(Event::Quit);
        queue.push(Event::Quit);
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dropped_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(Event::Quit);
        queue.push(Event::GamepadAdded(DeviceId(2)));
        {
            let mut drain = queue.drain();
            assert_eq!(drain.next(), Some(Event::Quit));
        }
        assert!(queue.is_empty());
    }
}
