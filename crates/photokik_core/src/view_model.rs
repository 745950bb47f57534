use crate::{PhotoId, Screen, SWIPE_THRESHOLD};

/// Immutable rendering snapshot of [`AppState`](crate::AppState).
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub screen: Screen,
    /// The card to show on the swipe screen, `None` when the queue is
    /// exhausted ("No more photos to review!").
    pub current_photo: Option<PhotoCardView>,
    pub queue_len: usize,
    pub position: usize,
    pub swipe_threshold: f32,
    pub dirty: bool,
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            current_photo: None,
            queue_len: 0,
            position: 0,
            swipe_threshold: SWIPE_THRESHOLD,
            dirty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCardView {
    pub id: PhotoId,
    pub caption: String,
}
