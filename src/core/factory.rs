use crate::domain::model::{Album, Collection, MusicEntity, Single, Track};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive, validate_range};

pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2100;

/// The sole construction surface for catalog entities. Every invariant is
/// checked here, once, at construction; no entity that violates them can
/// come into existence and nothing re-validates later.
///
/// Errors name the first violated field in a fixed check order:
/// name, artist, year, then the kind-specific fields.
#[derive(Debug, Clone, Default)]
pub struct MusicFactory;

impl MusicFactory {
    pub fn new() -> Self {
        Self
    }

    fn validate_base(&self, name: &str, artist: &str, year: i32) -> Result<()> {
        validate_non_empty_string("name", name)?;
        validate_non_empty_string("artist", artist)?;
        validate_range("year", year, YEAR_MIN, YEAR_MAX)?;
        Ok(())
    }

    fn validate_track_fields(&self, duration: u32, track_number: u32) -> Result<()> {
        validate_positive("duration", duration)?;
        validate_positive("track_number", track_number)?;
        Ok(())
    }

    pub fn create_track(
        &self,
        name: &str,
        artist: &str,
        year: i32,
        duration: u32,
        track_number: u32,
        genre: &str,
    ) -> Result<MusicEntity> {
        self.validate_base(name, artist, year)?;
        self.validate_track_fields(duration, track_number)?;

        Ok(MusicEntity::Track(Track {
            name: name.trim().to_string(),
            artist: artist.trim().to_string(),
            year,
            duration,
            track_number,
            genre: genre.trim().to_string(),
        }))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_single(
        &self,
        name: &str,
        artist: &str,
        year: i32,
        duration: u32,
        track_number: u32,
        genre: &str,
        version: &str,
        is_remix: bool,
    ) -> Result<MusicEntity> {
        self.validate_base(name, artist, year)?;
        self.validate_track_fields(duration, track_number)?;

        // Blank version falls back to the conventional default.
        let version = version.trim();
        let version = if version.is_empty() {
            "Original".to_string()
        } else {
            version.to_string()
        };

        Ok(MusicEntity::Single(Single {
            name: name.trim().to_string(),
            artist: artist.trim().to_string(),
            year,
            duration,
            track_number,
            genre: genre.trim().to_string(),
            version,
            is_remix,
        }))
    }

    pub fn create_album(
        &self,
        name: &str,
        artist: &str,
        year: i32,
        style: &str,
        label: &str,
    ) -> Result<MusicEntity> {
        self.validate_base(name, artist, year)?;

        Ok(MusicEntity::Album(Album {
            name: name.trim().to_string(),
            artist: artist.trim().to_string(),
            year,
            style: style.trim().to_string(),
            label: label.trim().to_string(),
        }))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_collection(
        &self,
        name: &str,
        artist: &str,
        year: i32,
        style: &str,
        label: &str,
        theme: &str,
        release_year: i32,
    ) -> Result<MusicEntity> {
        self.validate_base(name, artist, year)?;
        validate_range("release_year", release_year, YEAR_MIN, YEAR_MAX)?;

        Ok(MusicEntity::Collection(Collection {
            name: name.trim().to_string(),
            artist: artist.trim().to_string(),
            year,
            style: style.trim().to_string(),
            label: label.trim().to_string(),
            theme: theme.trim().to_string(),
            release_year,
        }))
    }
}
