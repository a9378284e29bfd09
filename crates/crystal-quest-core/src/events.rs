//! One-directional event seam between the simulation and its observers.
//!
//! The simulation writes events into a sink handed to its `update` call and
//! never reads anything back, so rendering, audio and effects layers depend
//! on the simulation and not the other way around.

/// Receiver for events emitted during a simulation tick.
pub trait EventSink<E> {
    fn emit(&mut self, event: E);
}

impl<E> EventSink<E> for Vec<E> {
    fn emit(&mut self, event: E) {
        self.push(event);
    }
}

/// Sink that drops everything. Useful for headless stepping.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardEvents;

impl<E> EventSink<E> for DiscardEvents {
    fn emit(&mut self, _event: E) {}
}

/// FIFO buffer that observers drain once per frame.
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    pending: Vec<E>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event in emission order, leaving the queue empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, E> {
        self.pending.drain(..)
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventSink<E> for EventQueue<E> {
    fn emit(&mut self, event: E) {
        self.pending.push(event);
    }
}
