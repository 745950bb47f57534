//! PhotoKik terminal front end: wires the pure core to the photo source,
//! the outcome shelf, logging and settings.
pub mod platform;
