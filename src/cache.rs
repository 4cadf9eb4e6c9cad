//! Fingerprint-keyed persistence for disc records.
//!
//! `DiscCache` maps a `DiscRecord` to and from one section of the cache
//! file; `Store` is the sectioned key-value file primitive underneath it.
//! The file's location is resolved here as well: an env override first,
//! then the XDG config directory, then `~/.config`.

mod adapter;
mod path;
mod store;

pub use adapter::{DiscCache, track_count};
pub use store::Store;
