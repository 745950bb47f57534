use chrono::{DateTime, Utc};
use kik_logging::{kik_debug, kik_info};
use photokik_core::{Decision, PhotoId, PhotoItem};

/// Receives `(photo, decision)` pairs from the platform layer. The review
/// queue itself keeps no history, so this is the only record of outcomes.
pub trait OutcomeSink {
    fn record(&mut self, item: PhotoItem, decision: Decision);
}

/// A kept photo together with when it was kept, for the gallery's
/// "Saved N days ago" rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptPhoto {
    pub item: PhotoItem,
    pub kept_at: DateTime<Utc>,
}

/// In-memory kept-set and trash bin. Nothing here survives the process;
/// persistent storage of either set is out of scope.
#[derive(Debug, Clone, Default)]
pub struct PhotoShelf {
    kept: Vec<KeptPhoto>,
    trash: Vec<PhotoItem>,
}

impl PhotoShelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photos kept so far, oldest first.
    pub fn kept(&self) -> &[KeptPhoto] {
        &self.kept
    }

    /// Photos kiked so far, oldest first.
    pub fn trash(&self) -> &[PhotoItem] {
        &self.trash
    }

    /// Discards everything in the trash bin; returns how many photos went.
    pub fn empty_trash(&mut self) -> usize {
        let count = self.trash.len();
        self.trash.clear();
        if count > 0 {
            kik_info!("Emptied trash: {} photo(s)", count);
        }
        count
    }

    /// Moves a trashed photo back to the kept set.
    pub fn restore(&mut self, id: PhotoId) -> Option<&KeptPhoto> {
        let index = self.trash.iter().position(|item| item.id == id)?;
        let item = self.trash.remove(index);
        kik_info!("Restored photo {} from trash", item.id);
        self.kept.push(KeptPhoto {
            item,
            kept_at: Utc::now(),
        });
        self.kept.last()
    }

    // The review loop wraps around, so the same photo can be decided again;
    // the latest decision wins.
    fn forget(&mut self, id: PhotoId) {
        self.kept.retain(|kept| kept.item.id != id);
        self.trash.retain(|item| item.id != id);
    }
}

impl OutcomeSink for PhotoShelf {
    fn record(&mut self, item: PhotoItem, decision: Decision) {
        kik_debug!("Recording {:?} for photo {}", decision, item.id);
        self.forget(item.id);
        match decision {
            Decision::Keep => self.kept.push(KeptPhoto {
                item,
                kept_at: Utc::now(),
            }),
            Decision::Discard => self.trash.push(item),
        }
    }
}
