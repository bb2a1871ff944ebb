//! Fuzzy search and ranking over the catalog.
//!
//! Substring matches always score 1. Anything else must at least be an ordered
//! subsequence of the target text, and is scored by how much of the text it
//! covers and how long its longest contiguous run is.

use std::collections::BTreeMap;

use crate::catalog::models::{ArtistStats, SearchResult, VideoRecord};

/// Maximum number of videos returned by a search.
pub const SEARCH_RESULT_LIMIT: usize = 8;

/// Queries shorter than this (in characters) are treated as "no search yet".
pub const MIN_QUERY_CHARS: usize = 2;

/// Weight applied to artist-name matches when scoring a video.
const ARTIST_MATCH_WEIGHT: f64 = 0.8;

/// Score floor for any valid subsequence match.
const SUBSEQUENCE_BASE: f64 = 0.3;

/// Weight of each of the coverage and contiguity terms.
const SUBSEQUENCE_TERM_WEIGHT: f64 = 0.35;

/// Scores how well `query` matches `text`, in `[0, 1]`.
///
/// # Arguments
///
/// * `query` - Free-text query
/// * `text` - Candidate text (title or artist name)
///
/// # Returns
///
/// `1.0` for a case-insensitive substring match, `0.0` when `query` is not a
/// subsequence of `text` (or either is empty), otherwise
/// `0.3 + 0.35 * (|query| / |text|) + 0.35 * (longest_run / |query|)`.
#[must_use]
pub fn similarity(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text.contains(&query) {
        return 1.0;
    }

    let query: Vec<char> = query.chars().collect();
    let text_len = text.chars().count();

    let mut matched = 0;
    let mut last_match: Option<usize> = None;
    let mut run: u32 = 0;
    let mut longest_run: u32 = 0;

    for (index, ch) in text.chars().enumerate() {
        if matched == query.len() {
            break;
        }
        if ch != query[matched] {
            continue;
        }

        run = match last_match {
            Some(last) if last + 1 == index => run + 1,
            _ => 1,
        };
        longest_run = longest_run.max(run);
        last_match = Some(index);
        matched += 1;
    }

    if matched < query.len() {
        return 0.0;
    }

    let query_len = query.len() as f64;
    let coverage = query_len / text_len as f64;
    let contiguity = f64::from(longest_run) / query_len;

    (SUBSEQUENCE_BASE + SUBSEQUENCE_TERM_WEIGHT * coverage + SUBSEQUENCE_TERM_WEIGHT * contiguity)
        .min(1.0)
}

/// Ranks artists and videos against a query.
///
/// # Arguments
///
/// * `query` - Free-text query
/// * `artists` - Artist names to rank
/// * `videos` - Videos to rank
/// * `artist_stats` - Per-artist statistics used to break ties between artists
///
/// # Returns
///
/// A `SearchResult` with matching artists (score, then total views, descending)
/// and at most [`SEARCH_RESULT_LIMIT`] videos (score, then views, descending).
/// Queries shorter than [`MIN_QUERY_CHARS`] return an empty result.
#[must_use]
pub fn search_catalog(
    query: &str,
    artists: &[String],
    videos: &[VideoRecord],
    artist_stats: &BTreeMap<String, ArtistStats>,
) -> SearchResult {
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchResult::default();
    }

    let total_views = |name: &str| artist_stats.get(name).map_or(0, |stats| stats.total_views);

    let mut scored_artists: Vec<(f64, &String)> = artists
        .iter()
        .map(|name| (similarity(query, name), name))
        .filter(|(score, _)| *score > 0.0)
        .collect();
    scored_artists.sort_by(|(score_a, name_a), (score_b, name_b)| {
        score_b
            .total_cmp(score_a)
            .then_with(|| total_views(name_b).cmp(&total_views(name_a)))
    });

    let mut scored_videos: Vec<(f64, &VideoRecord)> = videos
        .iter()
        .map(|video| {
            let title_score = similarity(query, &video.title);
            let artist_score = ARTIST_MATCH_WEIGHT * similarity(query, &video.artist);
            (title_score.max(artist_score), video)
        })
        .filter(|(score, _)| *score > 0.0)
        .collect();
    scored_videos.sort_by(|(score_a, video_a), (score_b, video_b)| {
        score_b
            .total_cmp(score_a)
            .then_with(|| video_b.view_count.cmp(&video_a.view_count))
    });

    SearchResult {
        artists: scored_artists
            .into_iter()
            .map(|(_, name)| name.clone())
            .collect(),
        videos: scored_videos
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(|(_, video)| video.clone())
            .collect(),
    }
}
