use tokio::sync::broadcast;

/// Buffered change events per subscriber. Slow subscribers see
/// `RecvError::Lagged` and should simply re-read state.
const CHANNEL_CAPACITY: usize = 64;

/// Publish side of a store's change feed.
///
/// Publishing never blocks and never fails: with no subscribers the event is
/// dropped.
#[derive(Debug, Clone)]
pub struct ChangeNotifier<E: Clone> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone> ChangeNotifier<E> {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    pub fn publish(&self, change: E) {
        // Err only means nobody is listening.
        let _ = self.sender.send(change);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E: Clone> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}
