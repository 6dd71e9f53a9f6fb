use anyhow::{Context, Result};
use artscout_model::{Artist, ExhibitionHistory};
use artscout_store::ArtStore;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artscout")]
#[command(about = "Artist website research and investment analysis tool")]
#[command(version)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    /// Path to the SQLite database file
    #[arg(
        long,
        global = true,
        env = "ARTSCOUT_DB",
        default_value = artscout_store::DEFAULT_DB_PATH
    )]
    db_path: String,

    /// Model used for extraction and analysis
    #[arg(
        long,
        global = true,
        env = "ARTSCOUT_MODEL",
        default_value = artscout_llm::client::DEFAULT_MODEL
    )]
    model: String,

    /// Base URL of the Anthropic API
    #[arg(long, global = true, env = "ANTHROPIC_BASE_URL")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape an artist's website, extract a profile, and save it
    Scrape {
        /// Artist name (the database key)
        #[arg(short, long)]
        name: String,

        /// Base URL of the artist's website (e.g., "https://janedoe.art")
        #[arg(short, long)]
        url: String,

        /// Print the extracted profile without saving it
        #[arg(long)]
        no_save: bool,
    },

    /// Produce an investment recommendation for a saved artist
    Analyze {
        /// Artist name as saved by `scrape` or `enter`
        #[arg(short, long)]
        name: String,

        /// Price of a specific artwork to assess
        #[arg(short, long)]
        price: Option<f64>,

        /// Print the analysis as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Enter or update artist data by hand
    Enter {
        #[command(flatten)]
        entry: ManualEntry,

        /// Replace the record if the artist already exists
        #[arg(long)]
        overwrite: bool,
    },

    /// List saved artists
    List,
}

/// Fields for a hand-entered artist. Blank values are stored as unknown.
#[derive(Args, Default)]
struct ManualEntry {
    /// Artist name (the database key)
    #[arg(short, long)]
    name: String,

    /// Education (e.g., "BFA Yale, MFA RISD")
    #[arg(long)]
    education: Option<String>,

    /// Art style/medium (e.g., "Abstract painting, mixed media")
    #[arg(long)]
    art_style: Option<String>,

    /// Gallery representation
    #[arg(long)]
    gallery: Option<String>,

    /// Notable exhibitions
    #[arg(long)]
    exhibitions: Option<String>,

    /// Website URL
    #[arg(long)]
    website: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn,hyper_util=info",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn,hyper_util=info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Scrape { name, url, no_save } => {
            let client =
                artscout_llm::AnthropicClient::from_env(&cli.model, cli.api_base.as_deref())?;
            let source = artscout_acquire::HttpPageSource::new()?;

            let site = artscout_acquire::fetch_site(&name, &url, &source).await;
            let text = site.combined_text();
            tracing::info!(
                pages = site.pages.len(),
                failed = site.failures.len(),
                chars = text.chars().count(),
                "Collected website text"
            );

            let extracted = artscout_llm::extract_profile(&client, &name, &url, &text).await;
            let Some(artist) = extracted else {
                anyhow::bail!("Could not extract a profile for '{name}'");
            };
            println!("{}", serde_json::to_string_pretty(&artist)?);

            if no_save {
                tracing::info!("Not saving (--no-save)");
            } else {
                let store = ArtStore::open(&cli.db_path)?;
                let artist_id = store.add_artist(&artist)?;
                println!("Saved to database (artist ID: {artist_id})");
            }
        }
        Commands::Analyze { name, price, json } => {
            let client =
                artscout_llm::AnthropicClient::from_env(&cli.model, cli.api_base.as_deref())?;
            let store = ArtStore::open(&cli.db_path)?;

            let outcome = artscout_llm::analyze_artist(&client, &store, &name, price).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.report());
            }
        }
        Commands::Enter { entry, overwrite } => {
            let store = ArtStore::open(&cli.db_path)?;
            if let Some(artist_id) = enter_artist(&store, entry, overwrite)? {
                println!("Artist data saved (ID: {artist_id})");
            }
        }
        Commands::List => {
            let store = ArtStore::open(&cli.db_path)?;
            let artists = store.list_artists()?;
            if artists.is_empty() {
                println!("No artists saved. Run 'scrape' or 'enter' first.");
                return Ok(());
            }

            println!(
                "{:>4} | {:<24} | {:<28} | {:<28} | {:<25}",
                "ID", "Artist", "Style", "Website", "Collected"
            );
            println!("{}", "-".repeat(121));
            for stored in &artists {
                let a = &stored.artist;
                println!(
                    "{:>4} | {:<24} | {:<28} | {:<28} | {:<25}",
                    stored.artist_id,
                    truncate(&a.name, 24),
                    truncate(a.art_style.as_deref().unwrap_or("-"), 28),
                    truncate(a.website.as_deref().unwrap_or("-"), 28),
                    stored.data_collected_date,
                );
            }
            println!("\n{} artists in {}", artists.len(), store.path().display());
        }
    }

    Ok(())
}

/// Save a hand-entered artist and return its new ID.
///
/// An existing name is left alone (and `None` returned) unless `overwrite`
/// is set.
fn enter_artist(store: &ArtStore, entry: ManualEntry, overwrite: bool) -> Result<Option<i64>> {
    let name = entry.name.trim().to_string();
    anyhow::ensure!(!name.is_empty(), "Artist name must not be empty");

    if !overwrite && store.get_artist(&name)?.is_some() {
        tracing::warn!(artist = %name, "Artist already in database; pass --overwrite to replace");
        return Ok(None);
    }

    let artist = Artist {
        education: non_empty(entry.education),
        art_style: non_empty(entry.art_style),
        gallery_representation: non_empty(entry.gallery),
        exhibition_history: non_empty(entry.exhibitions).map(ExhibitionHistory::Text),
        website: non_empty(entry.website),
        ..Artist::new(name)
    };
    let artist_id = store
        .add_artist(&artist)
        .with_context(|| format!("Failed to save '{}'", artist.name))?;
    Ok(Some(artist_id))
}

/// Trim a field; blank input means "unknown".
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  MFA Yale ".into())), Some("MFA Yale".into()));
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Jane Doe", 24), "Jane Doe");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    fn temp_store() -> (tempfile::TempDir, ArtStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtStore::open(dir.path().join("art_data.db")).unwrap();
        (dir, store)
    }

    fn entry(name: &str, education: &str) -> ManualEntry {
        ManualEntry {
            name: name.into(),
            education: Some(education.into()),
            ..ManualEntry::default()
        }
    }

    #[test]
    fn test_enter_new_artist() {
        let (_dir, store) = temp_store();
        let mut new = entry("  Jane Doe ", "MFA Yale");
        new.art_style = Some("   ".into());
        new.exhibitions = Some("Whitney Biennial 2019, Tate 2021".into());

        let artist_id = enter_artist(&store, new, false).unwrap().expect("saved");

        let stored = store.get_artist("Jane Doe").unwrap().unwrap();
        assert_eq!(stored.artist_id, artist_id);
        assert_eq!(stored.artist.education.as_deref(), Some("MFA Yale"));
        assert_eq!(stored.artist.art_style, None);
        assert_eq!(
            stored.artist.exhibition_history,
            Some(ExhibitionHistory::Text("Whitney Biennial 2019, Tate 2021".into()))
        );
        assert!(stored.artist.raw_data.is_null());
    }

    #[test]
    fn test_enter_existing_artist_without_overwrite_keeps_row() {
        let (_dir, store) = temp_store();
        let first_id = enter_artist(&store, entry("Jane Doe", "MFA Yale"), false).unwrap().unwrap();

        let result = enter_artist(&store, entry("Jane Doe", "BFA RISD"), false).unwrap();

        assert_eq!(result, None);
        let stored = store.get_artist("Jane Doe").unwrap().unwrap();
        assert_eq!(stored.artist_id, first_id);
        assert_eq!(stored.artist.education.as_deref(), Some("MFA Yale"));
        assert_eq!(store.artist_count().unwrap(), 1);
    }

    #[test]
    fn test_enter_existing_artist_with_overwrite_replaces_row() {
        let (_dir, store) = temp_store();
        enter_artist(&store, entry("Jane Doe", "MFA Yale"), false).unwrap();

        let new_id = enter_artist(&store, entry("Jane Doe", "BFA RISD"), true).unwrap().expect("saved");

        let stored = store.get_artist("Jane Doe").unwrap().unwrap();
        assert_eq!(stored.artist_id, new_id);
        assert_eq!(stored.artist.education.as_deref(), Some("BFA RISD"));
        assert_eq!(store.artist_count().unwrap(), 1);
    }

    #[test]
    fn test_enter_blank_name_is_rejected() {
        let (_dir, store) = temp_store();
        assert!(enter_artist(&store, entry("   ", "MFA Yale"), false).is_err());
        assert_eq!(store.artist_count().unwrap(), 0);
    }

    #[test]
    fn test_parse_analyze_with_price() {
        let cli = Cli::try_parse_from(["artscout", "analyze", "--name", "Jane Doe", "--price", "1500"]).unwrap();
        match cli.command {
            Commands::Analyze { name, price, json } => {
                assert_eq!(name, "Jane Doe");
                assert_eq!(price, Some(1500.0));
                assert!(!json);
            }
            _ => panic!("expected analyze"),
        }
    }
}
