//! cdstash: a small on-disk cache of audio disc metadata.
//!
//! Records of album and per-track metadata are keyed by a 32-bit disc
//! fingerprint whose low byte encodes the disc's track count. A playback
//! host reads a cached [`DiscRecord`] before falling back to a network
//! lookup and writes freshly looked-up records back through [`DiscCache`].
//! Everything lives in one sectioned key-value text file under the user's
//! config directory.

pub mod cache;
pub mod error;
pub mod record;

pub use cache::{DiscCache, Store, track_count};
pub use error::{CacheError, TrackNotFound};
pub use record::{DiscRecord, ResolvedTrack, TrackSlot, UNKNOWN_TEXT};
