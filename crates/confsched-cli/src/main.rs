//! `confsched` CLI — browse a DroidKaigi 2024 timetable feed from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List every item, rendered in Tokyo time
//! confsched list -i timetable.json
//!
//! # First conference day only, in English, in Berlin time
//! confsched --lang en --tz Europe/Berlin list -i timetable.json --day day1
//!
//! # Search titles, descriptions and speakers (feed on stdin)
//! cat timetable.json | confsched list --query compose
//!
//! # Details of one item, or its raw JSON
//! confsched show 100 -i timetable.json
//! confsched show 100 -i timetable.json --json
//!
//! # Item counts per day
//! confsched days -i timetable.json
//!
//! # Favorites that run at the same time
//! confsched overlaps -i timetable.json --favorite 100,101,102
//! ```
//!
//! `--lang` and `--tz` can also be set through `CONFSCHED_LANG` and
//! `CONFSCHED_TZ`. Without either, the language follows `LANG`.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use confsched_model::{
    ConferenceDay, DisplayContext, Favorites, Lang, Timetable, TimetableFilter, TimetableItemId,
};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confsched", version, about = "DroidKaigi 2024 timetable CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Timetable feed (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Display language (defaults to the language of LANG)
    #[arg(long, global = true, value_enum, env = "CONFSCHED_LANG")]
    lang: Option<LangArg>,

    /// IANA timezone to render times in
    #[arg(long, global = true, env = "CONFSCHED_TZ", default_value = "Asia/Tokyo")]
    tz: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    Ja,
    En,
}

impl From<LangArg> for Lang {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Ja => Lang::Japanese,
            LangArg::En => Lang::English,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List timetable items, one per line
    List {
        /// Only this day (day1, day2, workday, 9/12, 2024-09-12)
        #[arg(long)]
        day: Option<String>,
        /// Case-insensitive search over titles, descriptions and speakers
        #[arg(short, long)]
        query: Option<String>,
        /// Comma-separated ids to mark as favorites
        #[arg(long = "favorite", value_delimiter = ',')]
        favorites: Vec<String>,
        /// Only list favorites
        #[arg(long, requires = "favorites")]
        favorites_only: bool,
    },
    /// Show the details of one item
    Show {
        /// Item id
        id: String,
        /// Print the item as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Show item counts per conference day
    Days,
    /// Report favorites that run at the same time
    Overlaps {
        /// Comma-separated favorite ids
        #[arg(long = "favorite", value_delimiter = ',', required = true)]
        favorites: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let context = display_context(cli.lang, &cli.tz)?;
    tracing::debug!(lang = ?context.lang, tz = %context.tz, "resolved display context");

    let timetable = load_timetable(cli.input.as_deref())?;

    match cli.command {
        Commands::List {
            day,
            query,
            favorites,
            favorites_only,
        } => {
            let days = match day.as_deref() {
                Some(raw) => vec![raw
                    .parse::<ConferenceDay>()
                    .with_context(|| format!("Invalid --day value: {}", raw))?],
                None => Vec::new(),
            };
            let favorites = to_favorites(&favorites);
            let filter = TimetableFilter {
                days,
                favorites_only,
                query,
                ..Default::default()
            };
            let filtered = timetable.filter(&filter, &favorites);
            tracing::debug!(
                matched = filtered.len(),
                total = timetable.len(),
                "filtered timetable"
            );

            for item in &filtered {
                println!("{}", render::list_line(item, context, &favorites));
            }
        }
        Commands::Show { id, json } => {
            let id = TimetableItemId::new(id);
            let item = timetable
                .get(&id)
                .with_context(|| format!("No timetable item with id '{}'", id))?;
            if json {
                let pretty = serde_json::to_string_pretty(item)
                    .context("Failed to serialize timetable item")?;
                println!("{}", pretty);
            } else {
                print!("{}", render::detail(item, context));
            }
        }
        Commands::Days => {
            for day in ConferenceDay::visible_days() {
                println!("{}: {} items", day, timetable.day_items(day).len());
            }
        }
        Commands::Overlaps { favorites } => {
            let favorites = to_favorites(&favorites);
            let overlaps = timetable.find_overlapping(&favorites);
            if overlaps.is_empty() {
                println!("No overlapping favorites");
            }
            for overlap in &overlaps {
                println!("{}", render::overlap_line(overlap, context));
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for piping. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

fn display_context(lang: Option<LangArg>, tz: &str) -> Result<DisplayContext> {
    let lang = match lang {
        Some(lang) => Lang::from(lang),
        None => Lang::from_locale_tag(&std::env::var("LANG").unwrap_or_default()),
    };
    DisplayContext::parse(lang, tz).context("Invalid --tz value")
}

fn load_timetable(path: Option<&str>) -> Result<Timetable> {
    let json = read_input(path)?;
    let timetable = Timetable::from_json(&json).context("Failed to parse timetable feed")?;

    for item in &timetable {
        if !item.entry().is_time_ordered() {
            tracing::warn!(id = %item.id(), "timetable item does not end after it starts");
        }
    }
    tracing::debug!(
        items = timetable.len(),
        source = path.unwrap_or("<stdin>"),
        "loaded timetable"
    );

    Ok(timetable)
}

fn to_favorites(ids: &[String]) -> Favorites {
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(TimetableItemId::new)
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
