use crate::gesture::{classify_with_threshold, SwipeOutcome};
use crate::{AppState, Decision, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PhotosLoaded(items) => {
            state.reload_photos(items);
            Vec::new()
        }
        Msg::RefreshRequested => vec![Effect::LoadPhotos],
        Msg::SwipeReleased { dx } => {
            match classify_with_threshold(dx, state.swipe_threshold()) {
                SwipeOutcome::Keep => decide(&mut state, Decision::Keep),
                SwipeOutcome::Discard => decide(&mut state, Decision::Discard),
                // Card snaps back; no state change, the animation is the
                // presentation layer's business.
                SwipeOutcome::Cancel => Vec::new(),
            }
        }
        Msg::KeepPressed => decide(&mut state, Decision::Keep),
        Msg::KikPressed => decide(&mut state, Decision::Discard),
        Msg::ScreenSelected(screen) => {
            state.select_screen(screen);
            Vec::new()
        }
        Msg::SwipeThresholdChanged(threshold) => {
            state.set_swipe_threshold(threshold);
            Vec::new()
        }
        Msg::EmptyTrashClicked => {
            // The trash screen renders from the shelf, not from core state,
            // so a repaint is due once the bin is cleared.
            state.mark_dirty();
            vec![Effect::EmptyTrash]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// A decision on an exhausted queue is dropped: a stray button event after an
/// empty reload must not crash the app. The typed seam for that case is
/// `TriageQueue::decide`, which signals `EmptyQueue`.
fn decide(state: &mut AppState, decision: Decision) -> Vec<Effect> {
    match state.decide(decision) {
        Ok(item) => vec![Effect::RecordOutcome { item, decision }],
        Err(_) => Vec::new(),
    }
}
