//! Data models for the video catalog.
//!
//! This module defines the core data structures used throughout the catalog system,
//! including the `VideoRecord` loaded from the static JSON asset and the aggregate
//! structures derived from it, with serde serialization in the asset's camelCase shape.

use serde::{Deserialize, Serialize};

/// Represents one produced music video in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Unique positive catalog key.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Credited artist(s); multiple names are joined by commas.
    pub artist: String,
    /// Free-form description (may be empty).
    #[serde(default)]
    pub description: String,
    /// 11-character YouTube video identifier.
    pub youtube_id: String,
    /// Upload date in zero-padded `YYYY-MM-DD` form.
    pub upload_date: String,
    /// Number of views at the time the catalog was generated.
    pub view_count: u64,
}

/// Aggregate statistics for one artist credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArtistStats {
    /// Number of videos credited to the artist.
    pub count: usize,
    /// Sum of view counts across those videos.
    pub total_views: u64,
    /// Earliest upload date.
    pub earliest: String,
    /// Latest upload date.
    pub latest: String,
}

/// The artist with the highest total view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopArtist {
    /// Artist name.
    pub name: String,
    /// That artist's statistics.
    pub stats: ArtistStats,
}

/// Portfolio-wide aggregate statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    /// Number of videos in the catalog.
    pub total_videos: usize,
    /// Number of distinct artist credits.
    pub total_artists: usize,
    /// Sum of all view counts.
    pub total_views: u64,
    /// Earliest upload date (if any video exists).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_date: Option<String>,
    /// Latest upload date (if any video exists).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_date: Option<String>,
    /// Most viewed artist (if any video exists).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_artist: Option<TopArtist>,
}

/// Sorted display partitions of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Lanes {
    /// Whole catalog, newest first.
    pub chronological: Vec<VideoRecord>,
    /// Videos at or above the popularity threshold, most viewed first.
    pub popular: Vec<VideoRecord>,
}

/// Search results containing artists and videos that match a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchResult {
    /// Matching artist names, best match first.
    pub artists: Vec<String>,
    /// Matching videos, best match first.
    pub videos: Vec<VideoRecord>,
}

impl SearchResult {
    /// Checks if neither list has any matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.videos.is_empty()
    }
}

/// Per-year bucket for the era timeline widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraBucket {
    /// Calendar year.
    pub year: i32,
    /// Videos uploaded that year.
    pub count: usize,
    /// Views accumulated by those videos.
    pub total_views: u64,
}

/// Per-month data point for the production pulse chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsePoint {
    /// Month in `YYYY-MM` form.
    pub month: String,
    /// Videos uploaded that month.
    pub count: usize,
}

/// Weighted edge between two co-credited artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationEdge {
    /// Lexicographically smaller artist name.
    pub a: String,
    /// Lexicographically larger artist name.
    pub b: String,
    /// Number of videos crediting both.
    pub weight: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::{from_str, json, to_value};

    use crate::catalog::models::{PortfolioStats, SearchResult, VideoRecord};

    #[test]
    fn test_video_record_reads_camel_case_asset() {
        let raw = r#"{
            "id": 7,
            "title": "Night Drive",
            "artist": "Neon Coast",
            "youtubeId": "dQw4w9WgXcQ",
            "uploadDate": "2024-05-01",
            "viewCount": 125000
        }"#;

        let video: VideoRecord = from_str(raw).unwrap();
        assert_eq!(video.id, 7);
        assert_eq!(video.youtube_id, "dQw4w9WgXcQ");
        assert_eq!(video.upload_date, "2024-05-01");
        assert_eq!(video.view_count, 125_000);
        assert_eq!(video.description, "");
    }

    #[test]
    fn test_video_record_writes_camel_case() {
        let video = VideoRecord {
            id: 1,
            title: "Title".to_string(),
            artist: "Artist".to_string(),
            youtube_id: "abcdefghijk".to_string(),
            upload_date: "2023-01-01".to_string(),
            view_count: 10,
            ..VideoRecord::default()
        };

        let value = to_value(&video).unwrap();
        assert_eq!(value["youtubeId"], json!("abcdefghijk"));
        assert_eq!(value["viewCount"], json!(10));
    }

    #[test]
    fn test_empty_portfolio_omits_optional_fields() {
        let value = to_value(PortfolioStats::default()).unwrap();
        assert!(value.get("topArtist").is_none());
        assert_eq!(value["totalViews"], json!(0));
    }

    #[test]
    fn test_default_search_result_is_empty() {
        assert!(SearchResult::default().is_empty());
    }
}
