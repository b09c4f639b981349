// SPDX-License-Identifier: MPL-2.0
//! TOML playlist files.
//!
//! A playlist lists the videos of the reel in display order:
//!
//! ```toml
//! [[items]]
//! id = 1
//! source = "https://example.com/intro.mp4"
//!
//! [[items]]
//! id = 2
//! source = "file:///videos/outro.webm"
//! ```
//!
//! Loading validates the list into a [`Collection`]: it must not be empty,
//! ids must be unique and every source must be non-blank.

use crate::domain::error::CollectionError;
use crate::domain::media::{Collection, Item, ItemId, SourceUri};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[items]]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub id: u64,
    pub source: String,
}

/// On-disk layout of a playlist file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlaylistFile {
    #[serde(default)]
    pub items: Vec<PlaylistEntry>,
}

impl PlaylistFile {
    /// Validates the entries into a collection, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] for an empty list,
    /// [`CollectionError::EmptySource`] for a blank source and
    /// [`CollectionError::DuplicateId`] for a repeated id.
    pub fn into_collection(self) -> std::result::Result<Collection, CollectionError> {
        if self.items.is_empty() {
            return Err(CollectionError::Empty);
        }
        let items = self
            .items
            .into_iter()
            .map(|entry| {
                let id = ItemId::new(entry.id);
                SourceUri::parse(&entry.source)
                    .map(|source| Item::new(id, source))
                    .ok_or(CollectionError::EmptySource(id))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Collection::new(items)
    }
}

impl From<&Collection> for PlaylistFile {
    fn from(collection: &Collection) -> Self {
        Self {
            items: collection
                .iter()
                .map(|item| PlaylistEntry {
                    id: item.id().value(),
                    source: item.source().as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// Parses playlist TOML into a validated collection.
///
/// # Errors
///
/// Returns [`crate::error::Error::Config`] for malformed TOML and
/// [`crate::error::Error::InvalidCollection`] when validation fails.
pub fn parse_playlist(content: &str) -> Result<Collection> {
    let file: PlaylistFile = toml::from_str(content)?;
    Ok(file.into_collection()?)
}

/// Reads and validates a playlist file.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read, otherwise
/// the errors of [`parse_playlist`].
pub fn load_playlist(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path)?;
    let collection = parse_playlist(&content)?;
    log::info!(
        "Loaded {} items from playlist {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PLAYLIST: &str = r#"
[[items]]
id = 10
source = "https://cdn.example.com/a.mp4"

[[items]]
id = 20
source = "  file:///videos/b.webm  "
"#;

    #[test]
    fn parses_items_in_order() {
        let collection = parse_playlist(PLAYLIST).expect("valid playlist");
        assert_eq!(collection.len(), 2);

        let first = collection.get(0).unwrap();
        assert_eq!(first.id(), ItemId::new(10));
        assert_eq!(first.source().as_str(), "https://cdn.example.com/a.mp4");

        let second = collection.get(1).unwrap();
        assert_eq!(second.id(), ItemId::new(20));
        assert_eq!(second.source().as_str(), "file:///videos/b.webm");
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let result = parse_playlist("");
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidCollection(CollectionError::Empty)
        );
    }

    #[test]
    fn blank_source_is_rejected() {
        let content = "[[items]]\nid = 3\nsource = \"   \"\n";
        assert_eq!(
            parse_playlist(content).unwrap_err(),
            Error::InvalidCollection(CollectionError::EmptySource(ItemId::new(3)))
        );
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let content = "[[items]]\nid = 1\nsource = \"a\"\n\n[[items]]\nid = 1\nsource = \"b\"\n";
        assert_eq!(
            parse_playlist(content).unwrap_err(),
            Error::InvalidCollection(CollectionError::DuplicateId(ItemId::new(1)))
        );
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let result = parse_playlist("[[items]\nid = ");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_field_is_config_error() {
        let result = parse_playlist("[[items]]\nid = 1\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(PLAYLIST.as_bytes()).expect("write playlist");

        let collection = load_playlist(file.path()).expect("load playlist");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = load_playlist(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn collection_converts_back_to_file() {
        let collection = parse_playlist(PLAYLIST).unwrap();
        let file = PlaylistFile::from(&collection);
        let serialized = toml::to_string(&file).unwrap();
        assert_eq!(parse_playlist(&serialized).unwrap(), collection);
    }
}
