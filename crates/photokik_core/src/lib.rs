//! PhotoKik core: pure triage state machine and view-model helpers.
mod effect;
mod gesture;
mod msg;
mod state;
mod triage;
mod update;
mod view_model;

pub use effect::Effect;
pub use gesture::{
    classify, classify_with_threshold, threshold_for_ratio, SwipeOutcome, CARD_WIDTH,
    DEFAULT_THRESHOLD_RATIO, SWIPE_THRESHOLD,
};
pub use msg::Msg;
pub use state::{AppState, Screen};
pub use triage::{Decision, EmptyQueue, PhotoId, PhotoItem, TriageQueue};
pub use update::update;
pub use view_model::{AppViewModel, PhotoCardView};
