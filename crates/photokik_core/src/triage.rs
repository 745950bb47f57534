use thiserror::Error;

pub type PhotoId = u64;

/// A single photo under review. Immutable once it enters the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoItem {
    pub id: PhotoId,
    pub caption: String,
}

impl PhotoItem {
    pub fn new(id: PhotoId, caption: impl Into<String>) -> Self {
        Self {
            id,
            caption: caption.into(),
        }
    }
}

/// The two terminal decisions for a photo in one review pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Discard,
}

/// Raised by [`TriageQueue::decide`] when there is no photo under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no photo under review: the queue is empty")]
pub struct EmptyQueue;

/// Ordered review queue: insertion order is review order.
///
/// `position` always satisfies `0 <= position <= items.len()`. The exhausted
/// state (`position == items.len()`) is only reachable through
/// [`TriageQueue::reload`] with an empty batch: `decide` wraps back to the
/// first photo after the last one, so a non-empty queue cycles rather than
/// terminating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TriageQueue {
    items: Vec<PhotoItem>,
    position: usize,
}

impl TriageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<PhotoItem>) -> Self {
        Self { items, position: 0 }
    }

    /// The photo currently under review, or `None` when the queue is
    /// exhausted. No side effects.
    pub fn current(&self) -> Option<&PhotoItem> {
        self.items.get(self.position)
    }

    /// Records a decision for the current photo and advances to the next one,
    /// wrapping to the front after the last photo.
    ///
    /// The decision itself is a classification signal for the caller to route
    /// to an outcome sink; the queue retains no keep/discard history. Returns
    /// the decided photo so the caller can do that routing, or `EmptyQueue`
    /// when there is nothing to decide on.
    pub fn decide(&mut self, decision: Decision) -> Result<PhotoItem, EmptyQueue> {
        // Not retained; the caller forwards (item, decision) onward.
        let _ = decision;
        let item = self.current().cloned().ok_or(EmptyQueue)?;
        self.position = (self.position + 1) % self.items.len();
        Ok(item)
    }

    /// Replaces the queue wholesale and restarts the review from the front.
    /// An empty batch is valid and leaves the queue immediately exhausted.
    pub fn reload(&mut self, items: Vec<PhotoItem>) {
        self.items = items;
        self.position = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.items.len()
    }

    /// 0-based index of the photo under review; equals `len()` when exhausted.
    pub fn position(&self) -> usize {
        self.position
    }
}
