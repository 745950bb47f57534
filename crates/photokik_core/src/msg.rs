#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The photo source supplied a fresh batch; replaces the review queue.
    PhotosLoaded(Vec<crate::PhotoItem>),
    /// User asked for a rescan of the photo source.
    RefreshRequested,
    /// User released a horizontal drag at offset `dx`.
    SwipeReleased { dx: f32 },
    /// User tapped the Keep action button.
    KeepPressed,
    /// User tapped the Kik (discard) action button.
    KikPressed,
    /// User picked a destination in the bottom navigation.
    ScreenSelected(crate::Screen),
    /// Swipe-sensitivity setting changed to a new absolute threshold.
    SwipeThresholdChanged(f32),
    /// User clicked Empty Trash on the trash screen.
    EmptyTrashClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
