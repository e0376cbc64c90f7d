//! Command-line driver for the emoji keyboard.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emoji_keyboard::{
    Catalog, DeviceProfile, EmojiRecord, KeyboardConfig, KeyboardEvent, Platform,
    SelectionController,
};

#[derive(Parser)]
#[command(name = "emoji-keyboard")]
#[command(about = "Device-aware emoji picker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Device platform (ios, android)
    #[arg(long, global = true, default_value = "ios")]
    platform: Platform,

    /// Device OS version as reported by the system
    #[arg(long, global = true, default_value = "17.0")]
    os_version: String,

    /// Emoji catalog JSON (defaults to the built-in catalog)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved compatibility threshold
    Profile,

    /// List category tabs with their sizes
    Categories,

    /// List the emoji of one category
    List {
        /// Category index (see `categories`)
        #[arg(long, default_value_t = 0)]
        category: usize,
    },

    /// Search emoji by name, tag or alias prefix
    Search {
        query: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emoji_keyboard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KeyboardConfig::load_from(path),
        None => KeyboardConfig::load(),
    };
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog = Catalog::load_or_builtin(catalog_path.as_deref());
    let profile = DeviceProfile::new(cli.platform.clone(), cli.os_version.clone());

    let on_event = Arc::new(|event: KeyboardEvent| {
        if let Ok(json) = serde_json::to_string(&event) {
            println!("{}", json);
        }
    });
    let mut keyboard = SelectionController::mount(&config, &profile, catalog.records(), on_event)?;

    match cli.command {
        Commands::Profile => {
            let compatible = keyboard.compatible();
            println!("platform:   {}", profile.platform);
            println!("os version: {}", profile.os_version);
            println!("threshold:  {}", compatible.threshold());
            println!("emoji:      {} of {}", compatible.len(), catalog.len());
        }
        Commands::Categories => {
            for (i, (tab, bucket)) in keyboard.tabs().iter().zip(keyboard.buckets()).enumerate() {
                println!("{:>2}  {}  {} ({})", i, tab.symbol, tab.title, bucket.members.len());
            }
        }
        Commands::List { category } => {
            keyboard.set_active_category(category)?;
            print_records(keyboard.current_list());
        }
        Commands::Search { query } => {
            keyboard.set_search_query(&query);
            keyboard.settle().await;
            print_records(keyboard.current_list());
        }
    }

    keyboard.dispose();
    Ok(())
}

fn print_records(records: &[EmojiRecord]) {
    if records.is_empty() {
        println!("(no emoji)");
        return;
    }
    for record in records {
        println!("{}  {}  :{}:", record.glyph, record.description, record.aliases.join(": :"));
    }
}
