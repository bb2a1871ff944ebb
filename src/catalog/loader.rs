//! Catalog loading and load-time validation.
//!
//! The catalog asset is either a bare JSON array of records or an object with a
//! `videos` array and optional `settings`. Validation runs once, here; every
//! derived view assumes a catalog that passed it.

use std::{
    collections::{HashMap, HashSet},
    fs::read_to_string,
    path::Path,
    sync::LazyLock,
};

use {
    chrono::NaiveDate,
    regex::Regex,
    serde::Deserialize,
    serde_json::from_str,
    tracing::{debug, info},
};

use crate::{catalog::models::VideoRecord, error::CatalogError};

/// YouTube id validation regex pattern.
const YOUTUBE_ID_PATTERN: &str = r"^[A-Za-z0-9_-]{11}$";

/// Upload date validation regex pattern (zero-padded ISO date).
const UPLOAD_DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

static YOUTUBE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(YOUTUBE_ID_PATTERN).unwrap_or_else(|e| panic!("invalid YouTube id pattern: {e}"))
});

static UPLOAD_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(UPLOAD_DATE_PATTERN).unwrap_or_else(|e| panic!("invalid date pattern: {e}"))
});

/// Settings embedded in the catalog asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSettings {
    /// View-count cutoff for the popular lane.
    #[serde(default)]
    pub popular_threshold: Option<u64>,
}

/// A validated, immutable video catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    videos: Vec<VideoRecord>,
    settings: CatalogSettings,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<VideoRecord>),
    WithSettings {
        #[serde(default)]
        settings: CatalogSettings,
        videos: Vec<VideoRecord>,
    },
}

impl Catalog {
    /// Creates a catalog from already-parsed records, validating them.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` naming the first offending record.
    pub fn new(videos: Vec<VideoRecord>, settings: CatalogSettings) -> Result<Self, CatalogError> {
        validate_catalog(&videos)?;
        Ok(Self { videos, settings })
    }

    /// Gets the records in catalog order.
    #[must_use]
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Gets the settings embedded in the asset.
    #[must_use]
    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Looks up a record by its catalog id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&VideoRecord> {
        self.videos.iter().find(|video| video.id == id)
    }

    /// Gets the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Checks if the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Loads catalogs from JSON text or files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parses and validates a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON, or a validation
    /// variant naming the offending record.
    pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
        let (videos, settings) = match from_str::<CatalogDocument>(json)? {
            CatalogDocument::Bare(videos) => (videos, CatalogSettings::default()),
            CatalogDocument::WithSettings { settings, videos } => (videos, settings),
        };

        debug!("CatalogLoader: Parsed {} records", videos.len());
        let catalog = Catalog::new(videos, settings)?;
        info!(videos = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, otherwise
    /// the same errors as [`CatalogLoader::from_json_str`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        debug!("CatalogLoader: Reading catalog from {:?}", path);
        let contents = read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Checks whether a YouTube id has the expected 11-character shape.
#[must_use]
pub fn is_valid_youtube_id(youtube_id: &str) -> bool {
    YOUTUBE_ID_REGEX.is_match(youtube_id)
}

/// Parses a zero-padded `YYYY-MM-DD` date.
///
/// Unpadded forms such as `2024-5-1` are rejected because derived views compare
/// dates as strings.
#[must_use]
pub fn parse_upload_date(date: &str) -> Option<NaiveDate> {
    if !UPLOAD_DATE_REGEX.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Validates catalog records, failing on the first malformed one.
///
/// # Errors
///
/// Returns the `CatalogError` variant describing the first problem found.
pub fn validate_catalog(videos: &[VideoRecord]) -> Result<(), CatalogError> {
    if videos.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen_ids = HashSet::with_capacity(videos.len());
    let mut seen_youtube_ids: HashMap<&str, u64> = HashMap::with_capacity(videos.len());

    for video in videos {
        if video.id == 0 {
            return Err(CatalogError::InvalidId {
                title: video.title.clone(),
            });
        }
        if video.title.trim().is_empty() {
            return Err(CatalogError::BlankField {
                id: video.id,
                field: "title",
            });
        }
        if video.artist.trim().is_empty() {
            return Err(CatalogError::BlankField {
                id: video.id,
                field: "artist",
            });
        }
        if !seen_ids.insert(video.id) {
            return Err(CatalogError::DuplicateId {
                id: video.id,
                title: video.title.clone(),
            });
        }
        if !is_valid_youtube_id(&video.youtube_id) {
            return Err(CatalogError::InvalidYoutubeId {
                id: video.id,
                youtube_id: video.youtube_id.clone(),
            });
        }
        if let Some(&first_id) = seen_youtube_ids.get(video.youtube_id.as_str()) {
            return Err(CatalogError::DuplicateYoutubeId {
                id: video.id,
                youtube_id: video.youtube_id.clone(),
                first_id,
            });
        }
        seen_youtube_ids.insert(&video.youtube_id, video.id);

        if parse_upload_date(&video.upload_date).is_none() {
            return Err(CatalogError::InvalidDate {
                id: video.id,
                date: video.upload_date.clone(),
            });
        }
    }

    Ok(())
}
