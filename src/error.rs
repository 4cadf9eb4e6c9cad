//! Error types for the crate.
//!
//! The taxonomy is deliberately small: a cache miss is a plain `false`, an
//! out-of-range track setter is a silent no-op, and only track queries and
//! storage I/O produce typed failures. Nothing here is ever fatal to the
//! host — every failure degrades to "no metadata available".

use std::io;

use thiserror::Error;

/// Returned by `DiscRecord::resolve_track` when the record holds no usable
/// entry for the requested track number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no such track in record")]
pub struct TrackNotFound;

/// Failures locating or writing the on-disk cache file.
///
/// Reads never report these; an unreadable cache reads as a miss.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No override was set and neither `XDG_CONFIG_HOME` nor `HOME` is
    /// available to derive the default location from.
    #[error("no usable cache file location (XDG_CONFIG_HOME and HOME unset)")]
    NoCachePath,
    /// The cache file or its directory could not be written.
    #[error("failed to write cache file: {0}")]
    Io(#[from] io::Error),
}
