//! Inspection tool for the cache file.
//!
//! With no arguments, lists every cached disc. With one fingerprint
//! (8 hex digits, `0x` prefix optional), prints that disc's record the
//! way a playback host would see it.

use std::env;
use std::process::ExitCode;

use cdstash::{DiscCache, DiscRecord, Store, UNKNOWN_TEXT, track_count};

fn main() -> ExitCode {
    env_logger::init();

    let cache = match DiscCache::open_default() {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("cdstash: {err}");
            return ExitCode::FAILURE;
        }
    };

    match env::args().nth(1) {
        None => list_discs(&cache),
        Some(arg) => match parse_fingerprint(&arg) {
            Some(fingerprint) => show_disc(&cache, fingerprint),
            None => {
                eprintln!("cdstash: not a disc fingerprint: {arg}");
                eprintln!("usage: cdstash [fingerprint]");
                ExitCode::FAILURE
            }
        },
    }
}

fn parse_fingerprint(arg: &str) -> Option<u32> {
    let hex = arg.strip_prefix("0x").unwrap_or(arg);
    u32::from_str_radix(hex, 16).ok()
}

fn list_discs(cache: &DiscCache) -> ExitCode {
    let Some(store) = Store::open(cache.path()) else {
        println!("no cache file at {}", cache.path().display());
        return ExitCode::SUCCESS;
    };

    for section in store.sections() {
        let album = store
            .get(section, "Albumname")
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_TEXT);
        match u32::from_str_radix(section, 16) {
            Ok(fingerprint) => {
                println!("{section}  {album}  ({} tracks)", track_count(fingerprint));
            }
            Err(_) => println!("{section}  {album}"),
        }
    }
    ExitCode::SUCCESS
}

fn show_disc(cache: &DiscCache, fingerprint: u32) -> ExitCode {
    let mut record = DiscRecord::new();
    if !cache.read(fingerprint, &mut record) {
        println!("no cached entry for {fingerprint:08x}");
        return ExitCode::SUCCESS;
    }

    let album = record
        .album_name()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_TEXT);
    println!("disc    {fingerprint:08x}");
    println!("album   {album}");
    println!("artist  {}", record.album_artist().unwrap_or(UNKNOWN_TEXT));
    println!("genre   {}", record.genre().unwrap_or(UNKNOWN_TEXT));
    if record.year() != 0 {
        println!("year    {}", record.year());
    }
    for num in 1..=track_count(fingerprint) {
        if let Ok(track) = record.resolve_track(num) {
            println!("{num:3}. {} - {}", track.artist, track.title);
        }
    }
    ExitCode::SUCCESS
}
