use crate::view_model::{AppViewModel, PhotoCardView};
use crate::{Decision, EmptyQueue, PhotoItem, TriageQueue, SWIPE_THRESHOLD};

/// The four navigation destinations of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Swipe,
    Gallery,
    Trash,
    Settings,
}

/// Whole-app state: the review queue, the active screen, and the swipe
/// sensitivity. Mutation happens only through [`update`](crate::update);
/// the view reads immutable [`AppViewModel`] snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    screen: Screen,
    queue: TriageQueue,
    swipe_threshold: f32,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            queue: TriageQueue::new(),
            swipe_threshold: SWIPE_THRESHOLD,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            screen: self.screen,
            current_photo: self.queue.current().map(|item| PhotoCardView {
                id: item.id,
                caption: item.caption.clone(),
            }),
            queue_len: self.queue.len(),
            position: self.queue.position(),
            swipe_threshold: self.swipe_threshold,
            dirty: self.dirty,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_swipe_threshold(&mut self, threshold: f32) {
        // A non-positive threshold would commit every release.
        let threshold = threshold.max(1.0);
        if self.swipe_threshold != threshold {
            self.swipe_threshold = threshold;
            self.mark_dirty();
        }
    }

    pub(crate) fn reload_photos(&mut self, items: Vec<PhotoItem>) {
        self.queue.reload(items);
        self.mark_dirty();
    }

    pub(crate) fn decide(&mut self, decision: Decision) -> Result<PhotoItem, EmptyQueue> {
        let item = self.queue.decide(decision)?;
        self.mark_dirty();
        Ok(item)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
