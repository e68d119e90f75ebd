//! src/model/destination.rs
//! ============================================================================
//! # Destination: Named Target Locations
//!
//! Fixed list loaded once at startup; the active destination is an index into
//! it, defaulting to the first entry. Paths are display-only, nothing is ever
//! written to them.

use serde::{Deserialize, Serialize};

/// Symbolic icon for a destination, rendered as a glyph in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DestIcon {
    Film,
    Tv,
    Music,
    Disc,
    HardDrive,
}

impl DestIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            DestIcon::Film => "🎬",
            DestIcon::Tv => "📺",
            DestIcon::Music => "🎵",
            DestIcon::Disc => "💿",
            DestIcon::HardDrive => "💾",
        }
    }
}

/// A named target location files are conceptually moved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Display-only filesystem path.
    pub path: String,
    pub icon: DestIcon,
}

/// Built-in destination list used when the config file does not override it.
pub fn default_destinations() -> Vec<Destination> {
    let raw: [(&str, &str, &str, DestIcon); 5] = [
        ("movies", "Jellyfin Movies", "/mnt/media/movies", DestIcon::Film),
        ("tv", "Jellyfin TV Shows", "/mnt/media/tv_shows", DestIcon::Tv),
        ("music", "Music Library", "/mnt/media/music", DestIcon::Music),
        ("isos", "ISO Images", "/mnt/storage/isos", DestIcon::Disc),
        (
            "backups",
            "Backups",
            "/mnt/backup/jdownloader",
            DestIcon::HardDrive,
        ),
    ];

    raw.into_iter()
        .map(|(id, name, path, icon)| Destination {
            id: id.to_owned(),
            name: name.to_owned(),
            path: path.to_owned(),
            icon,
        })
        .collect()
}
