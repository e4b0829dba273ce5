//! Binary entrypoint for the Memoria CLI.
//!
//! Prints what the overlay would show, driven by an exported progress
//! snapshot instead of a live game client.
//!
//! Commands:
//! - `init` - write a starter `config.toml`
//! - `status` - highest completed patch, starting city, grand company, MSQ progress
//! - `quests [-c <category>] [-s <sub>]` - list one quest group with completion marks
//! - `news` - maintenance, patch, and event countdowns
//!
//! See the library crate docs for module-level details: `memoria::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use memoria::config::Config;
use memoria::tracker::{
    load_progress, news, PlayerAttributes, ProgressSnapshot, QuestCategory, Selection, Session,
};

#[derive(Parser)]
#[command(name = "memoria")]
#[command(about = "Quest progress and news for the Memoria Alpha overlay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Player progress snapshot; overrides `player.progress_file`
    #[arg(short, long, global = true)]
    progress: Option<String>,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Show inferred progress for the player
    Status,
    /// List quests in one category
    Quests {
        /// Category: msq, chronicles, side, allied, classjob, other
        #[arg(short, long, default_value = "msq")]
        category: String,
        /// Sub-category index within the category
        #[arg(short, long, default_value_t = 0)]
        sub: usize,
    },
    /// Show maintenance, patch, and event countdowns
    News,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config, so there is nothing to load yet
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => match Config::load(&cli.config).await {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("{} (using defaults)", e);
                None
            }
        },
    };
    init_logging(&pre_config, cli.verbose);
    let config = pre_config.unwrap_or_default();
    let progress_path = cli.progress.as_deref();

    match cli.command {
        Commands::Init => {
            info!("Initializing new Memoria configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Status => {
            let (session, progress) = open_session(&config, progress_path);
            let (done, total) = session
                .catalog
                .progress(QuestCategory::MainScenario, &progress);
            println!("Highest completed patch: {}", session.highest_completed_patch(&progress));
            println!("Starting city: {}", progress.start_city());
            match progress.grand_company() {
                Some(gc) => println!("Grand company: {}", gc),
                None => println!("Grand company: none"),
            }
            println!("Main scenario: {}/{} complete", done, total);
        }
        Commands::Quests { category, sub } => {
            let category = QuestCategory::from_key(&category)
                .ok_or_else(|| anyhow!("Unknown category '{}'", category))?;
            let (session, progress) = open_session(&config, progress_path);
            let labels = session.filters.sub_labels(category);
            let sub = session.filters.clamp_sub(category, sub);
            println!("{} / {}", category.label(), labels.get(sub).copied().unwrap_or("All"));

            match session.select(category, sub, &progress, &progress) {
                Selection::Quests(rows) => {
                    for row in rows {
                        println!(
                            "[{}] {:<40} {:<24} Lv{}",
                            if row.completed { "x" } else { " " },
                            row.entry.title,
                            row.entry.area,
                            row.entry.level
                        );
                    }
                }
                other => println!("{}", other.message().unwrap_or_default()),
            }
        }
        Commands::News => {
            let (session, _) = open_session(&config, progress_path);
            match session.news_panel(news::now()) {
                Some(panel) => {
                    for line in panel.lines() {
                        println!("{}", line);
                    }
                }
                None => println!("{}", news::NO_NEWS),
            }
        }
    }

    Ok(())
}

fn open_session(config: &Config, progress_path: Option<&str>) -> (Session, ProgressSnapshot) {
    let progress = load_player_progress(config, progress_path);
    (Session::load(&config.data), progress)
}

fn load_player_progress(config: &Config, cli_path: Option<&str>) -> ProgressSnapshot {
    let path = cli_path.or(config.player.progress_file.as_deref());
    match path {
        Some(path) => load_progress(path).unwrap_or_default(),
        None => {
            warn!("No progress snapshot configured; treating every quest as incomplete");
            ProgressSnapshot::default()
        }
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Echo to the console only when a terminal is attached
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
