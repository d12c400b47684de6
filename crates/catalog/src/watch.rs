//! Change-subscription primitives.
//!
//! A lightweight pub/sub wrapper over `std::sync::mpsc`: the storefront runs
//! single-threaded event handling, so a plain channel per subscriber is
//! enough. Dropping a [`Subscription`] unsubscribes — the next publish prunes
//! the disconnected sender, so a torn-down component stops receiving updates.

use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, Sender, TryRecvError, channel};
use std::time::Duration;

/// A subscription to a change feed. Each subscription gets a copy of every
/// message published after it was created (broadcast semantics).
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Fan-out list of live subscribers.
#[derive(Debug)]
pub(crate) struct Publisher<M> {
    senders: Vec<Sender<M>>,
}

impl<M: Clone> Publisher<M> {
    pub(crate) fn new() -> Self {
        Self { senders: Vec::new() }
    }

    pub(crate) fn subscribe(&mut self) -> Subscription<M> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        Subscription::new(rx)
    }

    /// Deliver `message` to every live subscriber, dropping the ones whose
    /// receiving end has gone away.
    pub(crate) fn publish(&mut self, message: &M) {
        self.senders.retain(|tx| tx.send(message.clone()).is_ok());
    }
}
