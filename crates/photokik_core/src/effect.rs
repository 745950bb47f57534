use crate::{Decision, PhotoItem};

/// Side effects requested by [`update`](crate::update), executed by the
/// platform layer. The core itself performs no I/O and keeps no decision
/// history; everything durable happens behind these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Forward a decided photo to the outcome sink.
    RecordOutcome { item: PhotoItem, decision: Decision },
    /// Ask the photo source for a batch; it answers with `Msg::PhotosLoaded`.
    LoadPhotos,
    /// Clear the trash bin.
    EmptyTrash,
}
