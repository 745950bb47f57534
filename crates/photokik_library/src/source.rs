use photokik_core::PhotoItem;

/// Supplies review batches to the queue. A device-backed implementation
/// would scan the media store here; this app ships with a sample source.
pub trait PhotoSource {
    fn load(&self) -> Vec<PhotoItem>;
}

/// The built-in sample batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePhotoSource;

impl SamplePhotoSource {
    pub fn new() -> Self {
        Self
    }
}

impl PhotoSource for SamplePhotoSource {
    fn load(&self) -> Vec<PhotoItem> {
        [
            "Beautiful sunset at the beach",
            "Family dinner last weekend",
            "Document scan from work",
            "Vacation memories from mountains",
            "Concert photo from last night",
        ]
        .iter()
        .enumerate()
        .map(|(i, caption)| PhotoItem::new(i as u64 + 1, *caption))
        .collect()
    }
}
