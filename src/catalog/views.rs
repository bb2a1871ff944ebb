//! Derived catalog views.
//!
//! Pure folds over the catalog records: the artist list, per-artist and
//! portfolio-wide statistics, sorted display lanes, and the aggregates behind
//! the site's data widgets. [`CatalogView`] computes the shared ones once and is
//! passed explicitly to whoever needs them.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::catalog::{
    loader::Catalog,
    models::{
        ArtistStats, CollaborationEdge, EraBucket, Lanes, PortfolioStats, PulsePoint,
        SearchResult, TopArtist, VideoRecord,
    },
    search::search_catalog,
};

/// Fallback popularity cutoff when neither settings nor the catalog supply one.
pub const DEFAULT_POPULAR_THRESHOLD: u64 = 500_000;

/// Precomputed views over one catalog.
#[derive(Debug, Clone)]
pub struct CatalogView {
    videos: Vec<VideoRecord>,
    artists: Vec<String>,
    artist_stats: BTreeMap<String, ArtistStats>,
    portfolio: PortfolioStats,
}

impl CatalogView {
    /// Builds the view from catalog records.
    ///
    /// # Arguments
    ///
    /// * `videos` - Catalog records in catalog order
    ///
    /// # Returns
    ///
    /// A new `CatalogView` owning a copy of the records and their aggregates.
    #[must_use]
    pub fn new(videos: &[VideoRecord]) -> Self {
        let artists = all_artists(videos);
        let artist_stats = artist_stats(videos);
        let portfolio = portfolio_stats(videos, &artist_stats);

        Self {
            videos: videos.to_vec(),
            artists,
            artist_stats,
            portfolio,
        }
    }

    /// Builds the view from a validated catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.videos())
    }

    /// Gets the records in catalog order.
    #[must_use]
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Gets the sorted, de-duplicated artist list.
    #[must_use]
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    /// Gets the per-artist statistics.
    #[must_use]
    pub fn artist_stats(&self) -> &BTreeMap<String, ArtistStats> {
        &self.artist_stats
    }

    /// Gets the portfolio-wide statistics.
    #[must_use]
    pub fn portfolio(&self) -> &PortfolioStats {
        &self.portfolio
    }

    /// Partitions the records into display lanes.
    #[must_use]
    pub fn lanes(&self, popular_threshold: u64) -> Lanes {
        partition_by_lane(&self.videos, popular_threshold)
    }

    /// Ranks artists and videos against a free-text query.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResult {
        search_catalog(query, &self.artists, &self.videos, &self.artist_stats)
    }
}

/// Lists unique artist credits in lexicographic order.
///
/// The whole `artist` field is one key; multi-artist credits are not split here.
#[must_use]
pub fn all_artists(videos: &[VideoRecord]) -> Vec<String> {
    videos
        .iter()
        .map(|video| video.artist.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Aggregates per-artist statistics in a single pass.
#[must_use]
pub fn artist_stats(videos: &[VideoRecord]) -> BTreeMap<String, ArtistStats> {
    let mut stats: BTreeMap<String, ArtistStats> = BTreeMap::new();

    for video in videos {
        match stats.get_mut(&video.artist) {
            Some(entry) => {
                entry.count += 1;
                entry.total_views += video.view_count;
                // Zero-padded ISO dates order lexicographically.
                if video.upload_date < entry.earliest {
                    entry.earliest.clone_from(&video.upload_date);
                }
                if video.upload_date > entry.latest {
                    entry.latest.clone_from(&video.upload_date);
                }
            }
            None => {
                stats.insert(
                    video.artist.clone(),
                    ArtistStats {
                        count: 1,
                        total_views: video.view_count,
                        earliest: video.upload_date.clone(),
                        latest: video.upload_date.clone(),
                    },
                );
            }
        }
    }

    stats
}

/// Folds portfolio-wide statistics.
///
/// The top artist is the first artist, in sorted-artist order, with the highest
/// total view count. An empty catalog yields zero totals and no top artist.
#[must_use]
pub fn portfolio_stats(
    videos: &[VideoRecord],
    artist_stats: &BTreeMap<String, ArtistStats>,
) -> PortfolioStats {
    let total_views = videos.iter().map(|video| video.view_count).sum();
    let earliest_date = videos.iter().map(|video| &video.upload_date).min().cloned();
    let latest_date = videos.iter().map(|video| &video.upload_date).max().cloned();

    let mut top_artist: Option<(&String, &ArtistStats)> = None;
    for (name, stats) in artist_stats {
        if top_artist.is_none_or(|(_, best)| stats.total_views > best.total_views) {
            top_artist = Some((name, stats));
        }
    }

    PortfolioStats {
        total_videos: videos.len(),
        total_artists: artist_stats.len(),
        total_views,
        earliest_date,
        latest_date,
        top_artist: top_artist.map(|(name, stats)| TopArtist {
            name: name.clone(),
            stats: stats.clone(),
        }),
    }
}

/// Partitions the catalog into the chronological and popular lanes.
///
/// Both sorts are stable, so equal keys keep catalog order.
#[must_use]
pub fn partition_by_lane(videos: &[VideoRecord], popular_threshold: u64) -> Lanes {
    let mut chronological = videos.to_vec();
    chronological.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));

    let mut popular: Vec<VideoRecord> = videos
        .iter()
        .filter(|video| video.view_count >= popular_threshold)
        .cloned()
        .collect();
    popular.sort_by(|a, b| b.view_count.cmp(&a.view_count));

    Lanes {
        chronological,
        popular,
    }
}

/// Splits a multi-artist credit into individual names.
///
/// Only commas separate credits; `&` and `ft.` stay part of a name.
#[must_use]
pub fn credited_artists(artist: &str) -> Vec<&str> {
    artist
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Checks whether any individually credited artist is in `names`.
#[must_use]
pub fn has_any_credited<S: AsRef<str>>(artist: &str, names: &[S]) -> bool {
    credited_artists(artist)
        .iter()
        .any(|credited| names.iter().any(|name| name.as_ref() == *credited))
}

/// Returns the `limit` most viewed videos, ties in catalog order.
#[must_use]
pub fn top_hits(videos: &[VideoRecord], limit: usize) -> Vec<VideoRecord> {
    let mut hits = videos.to_vec();
    hits.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    hits.truncate(limit);
    hits
}

/// Groups uploads by year, oldest year first.
#[must_use]
pub fn era_timeline(videos: &[VideoRecord]) -> Vec<EraBucket> {
    let mut years: BTreeMap<i32, (usize, u64)> = BTreeMap::new();

    for video in videos {
        let Some(year) = video
            .upload_date
            .get(..4)
            .and_then(|year| year.parse::<i32>().ok())
        else {
            continue;
        };
        let entry = years.entry(year).or_default();
        entry.0 += 1;
        entry.1 += video.view_count;
    }

    years
        .into_iter()
        .map(|(year, (count, total_views))| EraBucket {
            year,
            count,
            total_views,
        })
        .collect()
}

/// Counts uploads per `YYYY-MM` month, oldest month first.
#[must_use]
pub fn production_pulse(videos: &[VideoRecord]) -> Vec<PulsePoint> {
    let mut months: BTreeMap<&str, usize> = BTreeMap::new();

    for video in videos {
        if let Some(month) = video.upload_date.get(..7) {
            *months.entry(month).or_default() += 1;
        }
    }

    months
        .into_iter()
        .map(|(month, count)| PulsePoint {
            month: month.to_string(),
            count,
        })
        .collect()
}

/// Builds the collaboration graph from multi-artist credits.
///
/// Edges are sorted by weight, heaviest first, then by names.
#[must_use]
pub fn collaboration_edges(videos: &[VideoRecord]) -> Vec<CollaborationEdge> {
    let mut weights: HashMap<(&str, &str), usize> = HashMap::new();

    for video in videos {
        let names: BTreeSet<&str> = credited_artists(&video.artist).into_iter().collect();
        let names: Vec<&str> = names.into_iter().collect();

        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                *weights.entry((*a, *b)).or_default() += 1;
            }
        }
    }

    let mut edges: Vec<CollaborationEdge> = weights
        .into_iter()
        .map(|((a, b), weight)| CollaborationEdge {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        })
        .collect();
    edges.sort_by(|x, y| {
        y.weight
            .cmp(&x.weight)
            .then_with(|| x.a.cmp(&y.a))
            .then_with(|| x.b.cmp(&y.b))
    });
    edges
}
