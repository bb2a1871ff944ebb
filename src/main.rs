//! Showreel - catalog inspection tool
//!
//! Loads the portfolio catalog with the user's settings and prints the views
//! the site renders: portfolio stats, lanes, widget aggregates, search results
//! and shuffle sequences.

use std::{path::PathBuf, process::ExitCode};

use {
    anyhow::{Result, bail},
    clap::{Parser, Subcommand},
    tracing::info,
};

use showreel::{
    catalog::{
        CatalogLoader, CatalogView,
        views::{collaboration_edges, era_timeline, has_any_credited, production_pulse, top_hits},
    },
    config::SettingsManager,
    display::{format_relative_age_now, format_view_count},
    error::{ErrorReporter, ResultExt},
    logging::init_logging,
    selection::{PlayerSession, RandomSource, SeededRandom, ThreadRandom},
    state::FavoritesStore,
};

#[derive(Parser)]
#[command(name = "showreel")]
#[command(about = "Inspect the portfolio video catalog", long_about = None)]
struct Cli {
    /// Catalog JSON file (overrides the settings file)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log filter directives (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Portfolio-wide statistics (default)
    Stats,

    /// Chronological and popular lanes
    Lanes {
        /// View-count cutoff for the popular lane
        #[arg(short, long)]
        threshold: Option<u64>,
    },

    /// Top hits, era timeline, production pulse and collaborations
    Widgets {
        /// Number of top hits to show
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Fuzzy search over artists and titles
    Search {
        /// Free-text query
        query: String,
    },

    /// Play a shuffled sequence without recent repeats
    Shuffle {
        /// Number of picks
        #[arg(default_value = "10")]
        count: usize,

        /// Seed for a reproducible sequence
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Toggle a favorite video, or list favorites when no id is given
    Favorite {
        /// Catalog id
        id: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorReporter::error(&e, "showreel");
            eprintln!("Error: {}", ErrorReporter::to_user_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_manager = SettingsManager::new().add_context("Loading settings")?;
    let settings = settings_manager.get_settings().clone();

    let Some(catalog_path) = cli
        .catalog
        .or_else(|| settings.catalog_path.as_ref().map(PathBuf::from))
    else {
        bail!(
            "No catalog given; pass --catalog or set catalog_path in {:?}",
            settings_manager.get_config_path()
        );
    };

    let catalog = CatalogLoader::from_path(&catalog_path)
        .add_contextf(format!("Loading catalog {}", catalog_path.display()))?;
    let view = CatalogView::from_catalog(&catalog);
    info!(artists = view.artists().len(), "Catalog view ready");

    match cli.command.unwrap_or(Command::Stats) {
        Command::Stats => {
            let portfolio = view.portfolio();
            println!("Videos:  {}", portfolio.total_videos);
            println!("Artists: {}", portfolio.total_artists);
            println!("Views:   {}", format_view_count(portfolio.total_views));
            if let (Some(earliest), Some(latest)) =
                (&portfolio.earliest_date, &portfolio.latest_date)
            {
                println!("Span:    {earliest} .. {latest}");
            }
            if let Some(top) = &portfolio.top_artist {
                println!(
                    "Top:     {} ({} views, {} videos)",
                    top.name,
                    format_view_count(top.stats.total_views),
                    top.stats.count
                );
            }
        }
        Command::Lanes { threshold } => {
            let threshold =
                threshold.unwrap_or_else(|| settings.resolve_popular_threshold(catalog.settings()));
            let lanes = view.lanes(threshold);

            println!("Latest:");
            for video in &lanes.chronological {
                let age = format_relative_age_now(&video.upload_date).unwrap_or_default();
                let is_tribute =
                    has_any_credited(&video.artist, settings.deceased_artists.as_slice());
                let tribute = if is_tribute { " †" } else { "" };
                println!("  {:>8}  {} - {}{tribute}", age, video.artist, video.title);
            }

            println!("Popular (>= {}):", format_view_count(threshold));
            for video in &lanes.popular {
                println!(
                    "  {:>6}  {} - {}",
                    format_view_count(video.view_count),
                    video.artist,
                    video.title
                );
            }
        }
        Command::Widgets { top } => {
            println!("Top hits:");
            for video in top_hits(view.videos(), top) {
                println!("  {:>6}  {}", format_view_count(video.view_count), video.title);
            }
            println!("Eras:");
            for bucket in era_timeline(view.videos()) {
                println!(
                    "  {}  {:>3} videos  {:>6}",
                    bucket.year,
                    bucket.count,
                    format_view_count(bucket.total_views)
                );
            }
            println!("Pulse:");
            for point in production_pulse(view.videos()) {
                println!("  {}  {}", point.month, "#".repeat(point.count));
            }
            println!("Collaborations:");
            for edge in collaboration_edges(view.videos()) {
                println!("  {} <-> {} ({})", edge.a, edge.b, edge.weight);
            }
        }
        Command::Search { query } => {
            let result = view.search(&query);
            if result.is_empty() {
                println!("No matches for {query:?}");
            }
            for artist in &result.artists {
                println!("artist  {artist}");
            }
            for video in &result.videos {
                println!("video   {} - {} [{}]", video.artist, video.title, video.youtube_id);
            }
        }
        Command::Shuffle { count, seed } => {
            let mut random: Box<dyn RandomSource> = match seed {
                Some(seed) => Box::new(SeededRandom::new(seed)),
                None => Box::new(ThreadRandom),
            };

            let mut session = PlayerSession::new(settings.shuffle_window);
            session.set_queue(view.videos().to_vec());
            session.set_shuffle(true);

            for _ in 0..count {
                if let Some(video) = session.next(random.as_mut()) {
                    println!("{} - {}", video.artist, video.title);
                }
            }
        }
        Command::Favorite { id } => {
            let favorites = FavoritesStore::open_default().add_context("Opening favorites")?;
            if let Err(e) = favorites.retain_known(&catalog) {
                ErrorReporter::warn(&anyhow::Error::from(e), "pruning favorites");
            }

            if let Some(id) = id {
                if catalog.get(id).is_none() {
                    bail!("No video with id {id}");
                }
                let is_favorite = favorites.toggle(id).add_context("Saving favorites")?;
                println!("{id} {}", if is_favorite { "added" } else { "removed" });
            } else {
                for id in favorites.ids() {
                    if let Some(video) = catalog.get(id) {
                        println!("{id:>5}  {} - {}", video.artist, video.title);
                    }
                }
            }
        }
    }

    Ok(())
}
