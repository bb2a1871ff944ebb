//! Integration tests for the catalog pipeline.
//!
//! This module loads the bundled sample catalog and verifies that loading,
//! derived views, lanes, widgets and search agree with each other.

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{
            Catalog, CatalogLoader, CatalogView,
            views::{collaboration_edges, credited_artists, era_timeline, has_any_credited},
        },
        config::UserSettings,
        display::format_view_count,
        selection::{PlayerSession, SeededRandom},
    };

    const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.sample.json");

    fn load_sample() -> Catalog {
        CatalogLoader::from_json_str(SAMPLE_CATALOG).expect("sample catalog should be valid")
    }

    fn ids<'a>(videos: impl IntoIterator<Item = &'a crate::catalog::VideoRecord>) -> Vec<u64> {
        videos.into_iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = load_sample();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.settings().popular_threshold, Some(500_000));
    }

    #[test]
    fn test_portfolio_consistency() {
        let catalog = load_sample();
        let view = CatalogView::from_catalog(&catalog);
        let portfolio = view.portfolio();

        assert_eq!(
            portfolio.total_views,
            catalog.videos().iter().map(|v| v.view_count).sum::<u64>()
        );
        assert_eq!(portfolio.total_views, 11_243_998);
        assert_eq!(portfolio.total_videos, 8);
        assert_eq!(portfolio.total_artists, view.artists().len());
        assert_eq!(portfolio.total_artists, 6);

        let top = portfolio.top_artist.as_ref().unwrap();
        assert_eq!(top.name, "Neon Coast");
        assert_eq!(format_view_count(top.stats.total_views), "7.0M");
        for stats in view.artist_stats().values() {
            assert!(top.stats.total_views >= stats.total_views);
        }
    }

    #[test]
    fn test_lanes_with_resolved_threshold() {
        let catalog = load_sample();
        let view = CatalogView::from_catalog(&catalog);
        let threshold = UserSettings::default().resolve_popular_threshold(catalog.settings());
        let lanes = view.lanes(threshold);

        assert_eq!(ids(&lanes.chronological), vec![8, 6, 7, 5, 4, 3, 2, 1]);
        assert_eq!(ids(&lanes.popular), vec![3, 6, 1, 4, 7]);
    }

    #[test]
    fn test_search_sample() {
        let view = CatalogView::from_catalog(&load_sample());

        let result = view.search("neon");
        assert_eq!(result.artists, vec!["Neon Coast", "Arcade Sun, Neon Coast"]);
        assert_eq!(ids(&result.videos), vec![3, 1, 4]);

        let result = view.search("chrome");
        assert_eq!(ids(&result.videos), vec![3]);

        assert!(view.search("n").is_empty());
        assert!(view.search("zzz").is_empty());
    }

    #[test]
    fn test_search_never_exceeds_cap() {
        let view = CatalogView::from_catalog(&load_sample());
        for query in ["a", "ar", "an", "e ", "un", "o", "st", "light"] {
            assert!(view.search(query).videos.len() <= 8);
        }
    }

    #[test]
    fn test_multi_artist_credits() {
        let catalog = load_sample();
        let credit = &catalog.get(8).unwrap().artist;
        assert_eq!(credited_artists(credit), vec!["Luna Vale", "Arcade Sun"]);
        assert!(has_any_credited(credit, &["Luna Vale"]));

        let edges = collaboration_edges(catalog.videos());
        let pairs: Vec<(&str, &str, usize)> = edges
            .iter()
            .map(|e| (e.a.as_str(), e.b.as_str(), e.weight))
            .collect();
        assert_eq!(
            pairs,
            vec![("Arcade Sun", "Luna Vale", 1), ("Arcade Sun", "Neon Coast", 1)]
        );
    }

    #[test]
    fn test_era_timeline_covers_catalog() {
        let catalog = load_sample();
        let timeline = era_timeline(catalog.videos());
        assert_eq!(timeline.iter().map(|b| b.count).sum::<usize>(), catalog.len());
        assert_eq!(timeline.first().map(|b| b.year), Some(2021));
        assert_eq!(timeline.last().map(|b| b.year), Some(2025));
    }

    #[test]
    fn test_session_over_sample() {
        let catalog = load_sample();
        let window = UserSettings::default().shuffle_window;
        let mut session = PlayerSession::new(window);
        let mut random = SeededRandom::new(2024);

        session.set_queue(catalog.videos().to_vec());
        session.set_shuffle(true);
        // Window clamps to catalog size - 1.
        assert_eq!(session.history().window(), 7);

        // With the window at n - 1, eight consecutive picks cover the catalog once.
        let mut picks: Vec<u64> = (0..8)
            .filter_map(|_| session.next(&mut random).map(|v| v.id))
            .collect();
        picks.sort_unstable();
        picks.dedup();
        assert_eq!(picks.len(), 8);
    }
}
