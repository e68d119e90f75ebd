//! src/catalog/entry.rs
//! ============================================================================
//! # FileEntry: Pending Download Metadata
//!
//! One record per completed download awaiting triage. Entries are created at
//! startup from the seed set (or a config override), removed when the transfer
//! workflow processes them, and never otherwise mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::size::parse_size;

/// Closed set of content categories used by the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Doc,
    Pdf,
    Spreadsheet,
    Code,
    Audio,
    Archive,
    Video,
}

impl FileCategory {
    /// All categories, in the order the filter chips cycle through them.
    pub const ALL: [FileCategory; 8] = [
        FileCategory::Video,
        FileCategory::Archive,
        FileCategory::Audio,
        FileCategory::Code,
        FileCategory::Image,
        FileCategory::Doc,
        FileCategory::Pdf,
        FileCategory::Spreadsheet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Doc => "doc",
            FileCategory::Pdf => "pdf",
            FileCategory::Spreadsheet => "spreadsheet",
            FileCategory::Code => "code",
            FileCategory::Audio => "audio",
            FileCategory::Archive => "archive",
            FileCategory::Video => "video",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pending file awaiting triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name; arbitrary text, not guaranteed unique.
    pub name: String,
    pub category: FileCategory,
    /// Human-readable size literal, e.g. "2.1 GB".
    pub size_text: String,
    /// Calendar date, e.g. "2023-10-26".
    pub date_text: String,
}

impl FileEntry {
    /// Byte count for sorting; malformed literals count as zero.
    pub fn size_bytes(&self) -> u64 {
        parse_size(&self.size_text)
    }

    /// Timestamp for sorting. Unparseable dates compare as the epoch,
    /// mirroring the size codec's silent-zero policy.
    pub fn date_stamp(&self) -> i64 {
        NaiveDate::parse_from_str(&self.date_text, "%Y-%m-%d")
            .map(|d| d.and_hms_opt(0, 0, 0).map_or(0, |dt| dt.and_utc().timestamp()))
            .unwrap_or(0)
    }
}

/// Built-in seed set used when the config file does not supply its own.
pub fn seed_entries() -> Vec<FileEntry> {
    let raw: [(&str, &str, FileCategory, &str, &str); 7] = [
        (
            "1",
            "Oppenheimer.2023.IMAX.2160p.mkv",
            FileCategory::Video,
            "24.5 GB",
            "2023-10-24",
        ),
        (
            "2",
            "ubuntu-24.04-live-server-amd64.iso",
            FileCategory::Archive,
            "2.1 GB",
            "2023-10-25",
        ),
        (
            "3",
            "The.Office.US.S04.1080p.WEB-DL.x265.zip",
            FileCategory::Archive,
            "8.4 GB",
            "2023-10-26",
        ),
        (
            "4",
            "lofi_study_mix_2024.mp3",
            FileCategory::Audio,
            "145 MB",
            "2023-10-26",
        ),
        (
            "5",
            "pihole_backup_config.json",
            FileCategory::Code,
            "4 KB",
            "2023-10-27",
        ),
        (
            "6",
            "family_vacation_raw_photos.rar",
            FileCategory::Archive,
            "4.2 GB",
            "2023-10-27",
        ),
        (
            "7",
            "Spider-Man.Across.the.Spider-Verse.2023.1080p.mp4",
            FileCategory::Video,
            "4.8 GB",
            "2023-10-28",
        ),
    ];

    raw.into_iter()
        .map(|(id, name, category, size, date)| FileEntry {
            id: id.to_owned(),
            name: name.to_owned(),
            category,
            size_text: size.to_owned(),
            date_text: date.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let entries = seed_entries();
        let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn date_stamp_orders_seed_entries() {
        let entries = seed_entries();
        let first = entries[0].date_stamp();
        let last = entries[6].date_stamp();
        assert!(first < last);
        assert!(first > 0);
    }

    #[test]
    fn bad_date_compares_as_epoch() {
        let mut entry = seed_entries().remove(0);
        entry.date_text = "someday".to_owned();
        assert_eq!(entry.date_stamp(), 0);
    }

    #[test]
    fn category_serde_is_lowercase() {
        let entry = &seed_entries()[0];
        let text = toml::to_string(entry).expect("serialize entry");
        assert!(text.contains("category = \"video\""));

        let parsed: FileEntry = toml::from_str(&text).expect("parse entry");
        assert_eq!(&parsed, entry);
    }
}
