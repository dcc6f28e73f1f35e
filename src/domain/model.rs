use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind tag of a catalog entity. Fixed at construction; "editing" an
/// entity into a different kind means building a new one and replacing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Track,
    Single,
    Album,
    Collection,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Track => "Track",
            Kind::Single => "Single",
            Kind::Album => "Album",
            Kind::Collection => "Collection",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub year: i32,
    /// Seconds, always > 0 once constructed.
    pub duration: u32,
    pub track_number: u32,
    pub genre: String,
}

/// A single carries the track fields flattened plus its own extras,
/// rather than wrapping a `Track`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Single {
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub duration: u32,
    pub track_number: u32,
    pub genre: String,
    pub version: String,
    pub is_remix: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub style: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub style: String,
    pub label: String,
    pub theme: String,
    pub release_year: i32,
}

/// One catalog item. The set of kinds is closed; dispatch is a `match` on
/// the variant, never downcasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MusicEntity {
    Track(Track),
    Single(Single),
    Album(Album),
    Collection(Collection),
}

impl MusicEntity {
    pub fn kind(&self) -> Kind {
        match self {
            MusicEntity::Track(_) => Kind::Track,
            MusicEntity::Single(_) => Kind::Single,
            MusicEntity::Album(_) => Kind::Album,
            MusicEntity::Collection(_) => Kind::Collection,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MusicEntity::Track(t) => &t.name,
            MusicEntity::Single(s) => &s.name,
            MusicEntity::Album(a) => &a.name,
            MusicEntity::Collection(c) => &c.name,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            MusicEntity::Track(t) => &t.artist,
            MusicEntity::Single(s) => &s.artist,
            MusicEntity::Album(a) => &a.artist,
            MusicEntity::Collection(c) => &c.artist,
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            MusicEntity::Track(t) => t.year,
            MusicEntity::Single(s) => s.year,
            MusicEntity::Album(a) => a.year,
            MusicEntity::Collection(c) => c.year,
        }
    }

    /// Duration in seconds. Total over every kind: albums and collections
    /// have no playable duration of their own and report 0, so aggregation
    /// can sum over a mixed sequence without inspecting kinds.
    pub fn duration(&self) -> u32 {
        match self {
            MusicEntity::Track(t) => t.duration,
            MusicEntity::Single(s) => s.duration,
            MusicEntity::Album(_) | MusicEntity::Collection(_) => 0,
        }
    }
}

impl fmt::Display for MusicEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MusicEntity::Track(t) => write!(
                f,
                "[Track] {} - {} ({}) | #{} | {}s | genre: {}",
                t.artist, t.name, t.year, t.track_number, t.duration, t.genre
            ),
            MusicEntity::Single(s) => write!(
                f,
                "[Single] {} - {} ({}) | #{} | {}s | genre: {} | version: {}{}",
                s.artist,
                s.name,
                s.year,
                s.track_number,
                s.duration,
                s.genre,
                s.version,
                if s.is_remix { " (remix)" } else { "" }
            ),
            MusicEntity::Album(a) => write!(
                f,
                "[Album] {} - {} ({}) | style: {} | label: {}",
                a.artist, a.name, a.year, a.style, a.label
            ),
            MusicEntity::Collection(c) => write!(
                f,
                "[Collection] {} - {} ({}) | style: {} | label: {} | theme: {} | released: {}",
                c.artist, c.name, c.year, c.style, c.label, c.theme, c.release_year
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_zero_for_album_and_collection() {
        let album = MusicEntity::Album(Album {
            name: "A".into(),
            artist: "B".into(),
            year: 2000,
            style: String::new(),
            label: String::new(),
        });
        assert_eq!(album.duration(), 0);
        assert_eq!(album.kind(), Kind::Album);
    }

    #[test]
    fn display_includes_kind_tag_and_fields() {
        let track = MusicEntity::Track(Track {
            name: "Song".into(),
            artist: "Artist".into(),
            year: 2020,
            duration: 180,
            track_number: 3,
            genre: "Pop".into(),
        });
        let rendered = track.to_string();
        assert!(rendered.starts_with("[Track]"));
        assert!(rendered.contains("Song"));
        assert!(rendered.contains("180s"));
    }
}
