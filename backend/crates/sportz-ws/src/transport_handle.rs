use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::{Notify, mpsc};

/// The registry's handle on one live socket: its outbound queue and close signal
#[derive(Debug)]
pub struct TransportHandle {
    sender: mpsc::Sender<Message>,
    closed: Arc<Notify>,
}

impl TransportHandle {
    pub fn new(sender: mpsc::Sender<Message>, closed: Arc<Notify>) -> Self {
        Self { sender, closed }
    }

    pub fn sender(&self) -> &mpsc::Sender<Message> {
        &self.sender
    }

    /// Wake the connection task and drop the registry's sender.
    /// `notify_one` stores a permit, so a task not currently waiting still sees it.
    pub(crate) fn release(self) {
        self.closed.notify_one();
    }
}
