//! In-memory metadata for one disc.
//!
//! `DiscRecord` is the unit the rest of the crate trades in: hosts fill
//! one from a lookup service, the cache in `crate::cache` persists and
//! restores it, and playback UIs read display fields out of it through
//! `resolve_track`.

mod model;

pub use model::{DiscRecord, ResolvedTrack, TrackSlot, UNKNOWN_TEXT};

pub(crate) use model::MAX_TRACK_NUMBER;
