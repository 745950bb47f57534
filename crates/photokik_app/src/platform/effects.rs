use kik_logging::kik_info;
use photokik_core::{Effect, Msg};
use photokik_library::{OutcomeSink, PhotoShelf, PhotoSource, SamplePhotoSource};

/// Executes core effects against the photo source and the shelf.
///
/// Everything here is synchronous: one queue, one thread, effects run to
/// completion before the next message is applied, so `decide` and `reload`
/// stay atomic with respect to the reads that rendered them.
pub struct EffectRunner {
    source: SamplePhotoSource,
    shelf: PhotoShelf,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            source: SamplePhotoSource::new(),
            shelf: PhotoShelf::new(),
        }
    }

    pub fn shelf(&self) -> &PhotoShelf {
        &self.shelf
    }

    pub fn shelf_mut(&mut self) -> &mut PhotoShelf {
        &mut self.shelf
    }

    /// Runs each effect and collects the follow-up messages to feed back.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::RecordOutcome { item, decision } => {
                    kik_info!("Photo {} -> {:?}", item.id, decision);
                    self.shelf.record(item, decision);
                }
                Effect::LoadPhotos => {
                    let batch = self.source.load();
                    kik_info!("Photo source supplied {} photo(s)", batch.len());
                    follow_ups.push(Msg::PhotosLoaded(batch));
                }
                Effect::EmptyTrash => {
                    self.shelf.empty_trash();
                }
            }
        }
        follow_ups
    }
}

impl Default for EffectRunner {
    fn default() -> Self {
        Self::new()
    }
}
