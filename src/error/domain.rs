//! Domain-specific error types using `thiserror`.
//!
//! This module defines the main error enums for different domains
//! within Showreel. Settings and favorites errors live next to their stores.

use std::{io::Error as IoError, path::PathBuf};

use {serde_json::Error as SerdeJsonError, thiserror::Error};

/// Catalog loading and validation errors.
///
/// Every record-level variant names the offending record so the asset can be fixed
/// without bisecting the file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    /// The catalog JSON is malformed or missing required fields.
    #[error("Malformed catalog JSON: {0}")]
    ParseError(#[from] SerdeJsonError),
    /// The catalog contains no records.
    #[error("Catalog is empty")]
    Empty,
    /// A record has a zero id.
    #[error("Record \"{title}\" has invalid id 0")]
    InvalidId { title: String },
    /// A required text field is blank.
    #[error("Record {id} has a blank {field}")]
    BlankField { id: u64, field: &'static str },
    /// Two records share the same id.
    #[error("Duplicate id {id} (\"{title}\")")]
    DuplicateId { id: u64, title: String },
    /// Two records share the same YouTube id.
    #[error("Record {id} reuses YouTube id {youtube_id} already used by record {first_id}")]
    DuplicateYoutubeId {
        id: u64,
        youtube_id: String,
        first_id: u64,
    },
    /// The YouTube id does not match `[A-Za-z0-9_-]{11}`.
    #[error("Record {id} has invalid YouTube id {youtube_id:?}")]
    InvalidYoutubeId { id: u64, youtube_id: String },
    /// The upload date is not a valid `YYYY-MM-DD` date.
    #[error("Record {id} has invalid upload date {date:?}")]
    InvalidDate { id: u64, date: String },
}

#[cfg(test)]
mod tests {
    use crate::error::domain::CatalogError;

    #[test]
    fn test_catalog_error_display() {
        let duplicate = CatalogError::DuplicateYoutubeId {
            id: 9,
            youtube_id: "abcdefghijk".to_string(),
            first_id: 3,
        };
        assert_eq!(
            duplicate.to_string(),
            "Record 9 reuses YouTube id abcdefghijk already used by record 3"
        );

        let blank = CatalogError::BlankField {
            id: 4,
            field: "title",
        };
        assert_eq!(blank.to_string(), "Record 4 has a blank title");

        let date = CatalogError::InvalidDate {
            id: 2,
            date: "2024-13-01".to_string(),
        };
        assert_eq!(
            date.to_string(),
            "Record 2 has invalid upload date \"2024-13-01\""
        );
    }
}
