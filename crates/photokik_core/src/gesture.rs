use crate::Decision;

/// Horizontal drag distance that commits a decision, in the same
/// density-independent units as the card itself.
pub const SWIPE_THRESHOLD: f32 = 150.0;

/// Width of the swipe card the threshold is calibrated against.
pub const CARD_WIDTH: f32 = 320.0;

/// Default threshold expressed as a fraction of the card width (~47%).
pub const DEFAULT_THRESHOLD_RATIO: f32 = SWIPE_THRESHOLD / CARD_WIDTH;

/// Result of releasing a horizontal drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Keep,
    Discard,
    /// Released inside the threshold band; the card snaps back and no
    /// decision is made.
    Cancel,
}

impl SwipeOutcome {
    pub fn decision(self) -> Option<Decision> {
        match self {
            SwipeOutcome::Keep => Some(Decision::Keep),
            SwipeOutcome::Discard => Some(Decision::Discard),
            SwipeOutcome::Cancel => None,
        }
    }
}

/// Classifies a drag-release offset with the default threshold.
pub fn classify(dx: f32) -> SwipeOutcome {
    classify_with_threshold(dx, SWIPE_THRESHOLD)
}

/// Classifies a drag-release offset: right of `+threshold` keeps, left of
/// `-threshold` discards. The comparison is strict, so a release at exactly
/// the threshold cancels.
pub fn classify_with_threshold(dx: f32, threshold: f32) -> SwipeOutcome {
    if dx > threshold {
        SwipeOutcome::Keep
    } else if dx < -threshold {
        SwipeOutcome::Discard
    } else {
        SwipeOutcome::Cancel
    }
}

/// Maps a sensitivity ratio (fraction of card width) to an absolute
/// threshold, for the swipe-sensitivity setting.
pub fn threshold_for_ratio(ratio: f32) -> f32 {
    ratio * CARD_WIDTH
}
