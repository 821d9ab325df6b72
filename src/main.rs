use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use moodtune::config::AppConfig;
use moodtune::genre::GenreTable;
use moodtune::mood::{
    classify_mood_from_sentiment_label, classify_mood_from_text, detect_mood, Detection, Mood,
};
use moodtune::recommend::{self, Recommendation};
use moodtune::spotify::{PlaylistError, SpotifyClient};

#[derive(Parser)]
#[command(name = "moodtune", version, about = "Mood-based music recommender")]
struct Cli {
    /// Path to the config file (defaults to ~/.config/moodtune/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableName {
    /// Emotion table for image moods, text table for text moods
    Auto,
    /// Happy / Sad / Neutral only
    Text,
    /// All seven emotions
    Emotion,
}

impl TableName {
    fn resolve(self) -> Option<GenreTable> {
        match self {
            Self::Auto => None,
            Self::Text => Some(GenreTable::Text),
            Self::Emotion => Some(GenreTable::Emotion),
        }
    }
}

/// Mood inputs. The emotion label (image path) is tried first, then text.
#[derive(Args)]
struct MoodInput {
    /// Emotion label from an image emotion model (e.g. "happy", "angry")
    #[arg(long)]
    emotion: Option<String>,

    /// Error reported by the image emotion model; forces the text fallback
    #[arg(long, conflicts_with = "emotion")]
    emotion_error: Option<String>,

    /// Text sentiment polarity in [-1, 1]
    #[arg(long, allow_hyphen_values = true)]
    polarity: Option<f64>,

    /// Text sentiment label (positive / negative / neutral)
    #[arg(long, conflicts_with = "polarity")]
    sentiment: Option<String>,

    /// Genre table (defaults to config, then auto)
    #[arg(long, value_enum)]
    table: Option<TableName>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a mood and show the matching genre (no network)
    Mood {
        #[command(flatten)]
        input: MoodInput,
    },

    /// Classify a mood and fetch matching Spotify playlists
    Recommend {
        #[command(flatten)]
        input: MoodInput,

        /// Spotify client ID
        #[arg(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
        client_id: Option<String>,

        /// Spotify client secret
        #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
        client_secret: Option<String>,

        /// Number of playlists, 1-50 (defaults to config)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=50))]
        playlists: Option<u32>,

        /// Tracks per playlist, 0 to skip, up to 100 (defaults to config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        tracks: Option<u32>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the mood → genre tables
    Genres {
        /// Only show this table
        #[arg(long, value_enum)]
        table: Option<TableName>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load config file (optional, defaults if missing)
    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Commands::Mood { input } => {
            let table = input.table.map_or(config.table, TableName::resolve);
            let detection = detect(&input)?;
            let (table, genre) = recommend::preview(&detection, table);

            println!("Detected mood: {} (from {:?})", detection.mood, detection.source);
            println!("Genre: {genre} ({table} table)");
        }

        Commands::Recommend { input, client_id, client_secret, playlists, tracks, json } => {
            let table = input.table.map_or(config.table, TableName::resolve);
            let detection = detect(&input)?;

            // Credentials: CLI flag / env > config file
            let mut spotify = config.spotify;
            if client_id.is_some() {
                spotify.client_id = client_id;
            }
            if client_secret.is_some() {
                spotify.client_secret = client_secret;
            }
            if let Some(n) = playlists {
                spotify.playlist_limit = n as usize;
            }
            if let Some(n) = tracks {
                spotify.track_limit = n as usize;
            }

            if !json {
                println!("Detected mood: {}", detection.mood);
            }

            let client = SpotifyClient::new(spotify)?;
            let (_, genre) = recommend::preview(&detection, table);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.green} {msg}")
                    .unwrap()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
            );
            spinner.set_message(format!("Fetching {genre} playlists from Spotify..."));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = recommend::recommend_from_detection(detection.clone(), table, &client);
            spinner.finish_and_clear();

            match result {
                Ok(rec) if json => {
                    println!("{}", serde_json::to_string_pretty(&rec)?);
                }
                Ok(rec) => print_recommendation(&rec),
                Err(PlaylistError::NoPlaylists { .. }) if json => {
                    let rec = Recommendation::without_playlists(detection, table);
                    println!("{}", serde_json::to_string_pretty(&rec)?);
                }
                Err(PlaylistError::NoPlaylists { genre }) => {
                    println!("No playlists found for {genre}.");
                }
                Err(e) => return Err(e).context("Playlist search failed"),
            }
        }

        Commands::Genres { table } => {
            let tables = match table.and_then(TableName::resolve) {
                Some(t) => vec![t],
                None => vec![GenreTable::Text, GenreTable::Emotion],
            };
            for (i, t) in tables.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_genre_table(*t);
            }
        }
    }

    Ok(())
}

/// Run mood detection over the CLI inputs: emotion label first, text second.
fn detect(input: &MoodInput) -> Result<Detection> {
    let emotion = match (&input.emotion, &input.emotion_error) {
        (Some(label), _) => Some(Ok(label.clone())),
        (None, Some(err)) => Some(Err(err.clone())),
        (None, None) => None,
    };

    let text = || -> Option<Result<Mood, String>> {
        match (input.polarity, &input.sentiment) {
            (Some(score), _) => Some(Ok(classify_mood_from_text(score))),
            (None, Some(label)) => Some(Ok(classify_mood_from_sentiment_label(label))),
            (None, None) => None,
        }
    };

    detect_mood(emotion, text).context("Could not detect a mood")
}

fn print_recommendation(rec: &Recommendation) {
    let mut title = rec.genre.to_string();
    if let Some(first) = title.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    println!("Recommended {title} Playlists");
    println!();

    for p in &rec.playlists {
        println!("{}", p.name);
        println!("  {}", p.url);
        if let Some(image) = &p.image_url {
            println!("  Cover: {image}");
        }

        for t in &p.tracks {
            println!("    {} — {}", t.name, t.artist_line());
            match &t.preview_url {
                Some(url) => println!("      Preview: {url}"),
                None => println!("      (no preview available)"),
            }
        }
        println!("{}", "-".repeat(60));
    }
}

fn print_genre_table(table: GenreTable) {
    println!("{table} table:");
    println!("{:<10} {}", "Mood", "Genre");
    println!("{}", "-".repeat(20));
    for (mood, genre) in table.entries() {
        println!("{:<10} {}", mood.name(), genre);
    }
    println!("{:<10} {}", "(other)", moodtune::genre::DEFAULT_GENRE);
}
