use crate::error::TrackNotFound;

/// Placeholder substituted for any display field with no known value.
pub const UNKNOWN_TEXT: &str = "(unknown)";

/// Slots per record. Slot 0 is filler: track numbers are 1-based.
const TRACK_SLOTS: usize = 100;

/// Highest addressable track number.
pub(crate) const MAX_TRACK_NUMBER: usize = 99;

/// One slot of per-track metadata.
///
/// `Present` with both fields `None` is a real state: the track is known
/// to exist but nothing is known about it. It resolves to placeholders,
/// and the cache file drops it on a round trip since there is no key to
/// write for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackSlot {
    /// Nothing known about this track.
    #[default]
    Absent,
    /// Set at least once since the record was last cleared.
    Present {
        artist: Option<String>,
        title: Option<String>,
    },
}

/// A track's display fields after fallback resolution.
///
/// All three strings are owned copies; they stay usable after the record
/// they came from is mutated or dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrack {
    pub artist: String,
    pub album: String,
    pub title: String,
}

/// Metadata for one disc: album-level fields plus up to 99 tracks.
///
/// A fresh record is not valid; any successful setter call marks it valid
/// until the next [`clear`](DiscRecord::clear). Hosts reuse one record
/// across disc changes, so clearing has to return it to exactly the
/// freshly-created state.
#[derive(Debug, Clone)]
pub struct DiscRecord {
    album_name: Option<String>,
    album_artist: Option<String>,
    disc_id: i32,
    genre: Option<String>,
    year: i32,
    tracks: [TrackSlot; TRACK_SLOTS],
    valid: bool,
}

impl DiscRecord {
    /// Create an empty, not-yet-valid record.
    pub fn new() -> Self {
        Self {
            album_name: None,
            album_artist: None,
            disc_id: 0,
            genre: None,
            year: 0,
            tracks: std::array::from_fn(|_| TrackSlot::Absent),
            valid: false,
        }
    }

    /// Reset the record to the empty state for reuse. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Set artist and title for track `num`.
    ///
    /// Numbers outside `1..=99` are ignored and the passed strings are
    /// dropped. On a single-artist disc pass `artist: None` for every
    /// track; the album artist then applies at resolution time.
    pub fn set_track(&mut self, num: usize, artist: Option<String>, title: Option<String>) {
        if !(1..=MAX_TRACK_NUMBER).contains(&num) {
            return;
        }
        self.tracks[num] = TrackSlot::Present { artist, title };
        self.valid = true;
    }

    /// Set all album-level fields at once.
    ///
    /// `disc_id` and `year` arrive as decimal strings, the form the disc
    /// lookup service delivers them in; text without a leading number
    /// parses to 0. `artist: None` marks a multi-artist disc, in which
    /// case per-track artists take over in [`resolve_track`](Self::resolve_track).
    pub fn set_album(
        &mut self,
        name: Option<String>,
        artist: Option<String>,
        disc_id: Option<&str>,
        genre: Option<String>,
        year: Option<&str>,
    ) {
        self.valid = true;
        self.album_name = name;
        self.album_artist = artist;
        self.disc_id = disc_id.map_or(0, parse_decimal_prefix);
        self.genre = genre;
        self.year = year.map_or(0, parse_decimal_prefix);
    }

    /// Resolve track `num` to display fields, substituting [`UNKNOWN_TEXT`]
    /// for anything absent.
    ///
    /// The artist falls back from the track's own artist to the album
    /// artist to the placeholder. Fails when the record is not valid, the
    /// number is out of range, or the track was never set.
    pub fn resolve_track(&self, num: usize) -> Result<ResolvedTrack, TrackNotFound> {
        if !self.valid || !(1..=MAX_TRACK_NUMBER).contains(&num) {
            return Err(TrackNotFound);
        }
        let TrackSlot::Present { artist, title } = &self.tracks[num] else {
            return Err(TrackNotFound);
        };

        let artist = artist
            .as_deref()
            .or(self.album_artist.as_deref())
            .unwrap_or(UNKNOWN_TEXT);
        Ok(ResolvedTrack {
            artist: artist.to_string(),
            album: self.album_name.as_deref().unwrap_or(UNKNOWN_TEXT).to_string(),
            title: title.as_deref().unwrap_or(UNKNOWN_TEXT).to_string(),
        })
    }

    /// Album name, if one was set. An empty string is a known-but-blank
    /// name, distinct from `None`.
    pub fn album_name(&self) -> Option<&str> {
        self.album_name.as_deref()
    }

    /// Album-level artist. `None` on a multi-artist disc.
    pub fn album_artist(&self) -> Option<&str> {
        self.album_artist.as_deref()
    }

    /// Genre, if known.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    /// Numeric disc identifier, 0 when unknown. Not persisted.
    pub fn disc_id(&self) -> i32 {
        self.disc_id
    }

    /// Release year, 0 when unknown.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether any setter succeeded since creation or the last clear.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Raw artist and title of track `num`, without placeholder
    /// substitution. `None` when the number is out of range or the track
    /// was never set.
    pub fn track_fields(&self, num: usize) -> Option<(Option<&str>, Option<&str>)> {
        if !(1..=MAX_TRACK_NUMBER).contains(&num) {
            return None;
        }
        match &self.tracks[num] {
            TrackSlot::Absent => None,
            TrackSlot::Present { artist, title } => Some((artist.as_deref(), title.as_deref())),
        }
    }

    /// Numbers of all tracks that were set, ascending.
    pub fn present_tracks(&self) -> impl Iterator<Item = usize> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(slot, TrackSlot::Present { .. }))
            .map(|(num, _)| num)
    }
}

impl Default for DiscRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the leading decimal number of `input`, C `atoi` style: skip
/// leading whitespace, accept one optional sign, stop at the first
/// non-digit. No digits means 0; overlong values saturate.
pub(crate) fn parse_decimal_prefix(input: &str) -> i32 {
    let rest = input.trim_start();
    let (negative, digits) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    let mut value: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
