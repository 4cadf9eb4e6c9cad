//! Translation between `DiscRecord` and sections of the cache file.
//!
//! Sections are keyed by disc fingerprint. The fingerprint's low byte
//! carries the disc's track count, a convention inherited from the lookup
//! service's id scheme; the cache derives how many `track_*` keys to read
//! or write from it, since the file itself stores no count.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::CacheError;
use crate::record::{DiscRecord, MAX_TRACK_NUMBER};

use super::path::resolve_cache_path;
use super::store::Store;

/// Number of tracks encoded in a fingerprint's low byte.
pub fn track_count(fingerprint: u32) -> usize {
    (fingerprint & 0xff) as usize
}

/// Section name for a fingerprint: 8 hex digits, lowercase, zero-padded.
fn section_name(fingerprint: u32) -> String {
    format!("{fingerprint:08x}")
}

/// Fingerprint-keyed access to one on-disk cache file.
///
/// The value holds only the file's location. No handle or parsed state
/// survives between calls, so concurrent writers are simply last-one-wins
/// at file granularity.
#[derive(Debug, Clone)]
pub struct DiscCache {
    path: PathBuf,
}

impl DiscCache {
    /// Cache at the conventional location (env override, then XDG, then
    /// `~/.config`). Fails only when no location can be resolved.
    pub fn open_default() -> Result<Self, CacheError> {
        let path = resolve_cache_path().ok_or(CacheError::NoCachePath)?;
        Ok(Self { path })
    }

    /// Cache at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `record` under `fingerprint`.
    ///
    /// A missing cache file is the normal first-write case and is created
    /// on the spot. `Albumname` is always written, as an empty string when
    /// the record has none, because its presence is what [`read`](Self::read)
    /// treats as "this disc is cached". All other keys are optional and
    /// only ever added or overwritten; a key from an earlier write that no
    /// longer applies stays in the file.
    pub fn write(&self, fingerprint: u32, record: &DiscRecord) -> Result<(), CacheError> {
        let section = section_name(fingerprint);
        let mut store = Store::open(&self.path).unwrap_or_default();

        store.set(&section, "Albumname", record.album_name().unwrap_or(""));
        if let Some(artist) = record.album_artist() {
            store.set(&section, "Artistname", artist);
        }
        if record.year() != 0 {
            // Space-padded to four columns, the format the file has always
            // carried. The prefix-tolerant parse on read absorbs the pad.
            store.set(&section, "Year", &format!("{:4}", record.year()));
        }
        if let Some(genre) = record.genre() {
            store.set(&section, "Genre", genre);
        }

        for num in 1..=track_count(fingerprint).min(MAX_TRACK_NUMBER) {
            let Some((artist, title)) = record.track_fields(num) else {
                continue;
            };
            if let Some(artist) = artist {
                store.set(&section, &format!("track_artist{num}"), artist);
            }
            if let Some(title) = title {
                store.set(&section, &format!("track_title{num}"), title);
            }
        }

        store.save(&self.path)?;
        debug!("cached disc {section}");
        Ok(())
    }

    /// Persist `record`, swallowing failures.
    ///
    /// The cache is an optimization. When it cannot be written, the lookup
    /// that produced `record` just happens again next time, so hosts call
    /// this fire-and-forget variant; the failure is only logged.
    pub fn write_or_log(&self, fingerprint: u32, record: &DiscRecord) {
        if let Err(err) = self.write(fingerprint, record) {
            warn!("disc metadata not cached ({}): {err}", self.path.display());
        }
    }

    /// Populate `record` from the cache. Returns whether an entry for
    /// `fingerprint` was found.
    ///
    /// A missing or unreadable file, or a section without an `Albumname`
    /// key, is a miss and leaves the record untouched. On a hit the record
    /// is filled through its public setters and so becomes valid even when
    /// the section held album data only; hosts rely on that to skip the
    /// network lookup for such discs. Stored keys overwrite their fields.
    /// Fields the section does not mention keep whatever a reused record
    /// already held, except the disc id, which the stored form does not
    /// carry and which resets to 0. Pass a fresh record for a clean load.
    pub fn read(&self, fingerprint: u32, record: &mut DiscRecord) -> bool {
        let section = section_name(fingerprint);
        let Some(store) = Store::open(&self.path) else {
            return false;
        };
        let Some(album) = store.get(&section, "Albumname") else {
            debug!("no cached entry for disc {section}");
            return false;
        };

        record.set_album(
            Some(album.to_string()),
            store.get(&section, "Artistname").map(str::to_string),
            None,
            store.get(&section, "Genre").map(str::to_string),
            store.get(&section, "Year"),
        );

        for num in 1..=track_count(fingerprint).min(MAX_TRACK_NUMBER) {
            let artist = store.get(&section, &format!("track_artist{num}"));
            let title = store.get(&section, &format!("track_title{num}"));
            if artist.is_some() || title.is_some() {
                record.set_track(num, artist.map(str::to_string), title.map(str::to_string));
            }
        }

        debug!("cache hit for disc {section}");
        true
    }
}
