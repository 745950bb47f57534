//! PhotoKik library collaborators: the photo source that feeds the review
//! queue and the shelf that receives triage outcomes.
//!
//! The core never talks to these directly; the platform layer executes
//! `Effect`s against them and feeds the results back as messages.
mod shelf;
mod source;

pub use shelf::{KeptPhoto, OutcomeSink, PhotoShelf};
pub use source::{PhotoSource, SamplePhotoSource};
