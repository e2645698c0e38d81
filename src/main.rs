use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use wizardwebb::config::AppConfig;
use wizardwebb::constants::APP_NAME;
use wizardwebb::domain::{CategorySelection, LinkItem, LinkQuery};
use wizardwebb::web::{self, AppState};
use wizardwebb::{logging, metrics, Catalog};

#[derive(Parser)]
#[command(name = "wizardwebb")]
#[command(about = "Noir directory of web tools: search, filter, save time")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./wizardwebb.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Links file to load; overrides LINKS_FILE and the config file
    #[arg(long, global = true)]
    links_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Filter the catalog and print matching links
    List {
        /// Case-insensitive text matched against name, description, category and tags
        #[arg(long, short)]
        query: Option<String>,
        /// Exact category name, or "All"
        #[arg(long, short, default_value = "All")]
        category: String,
        /// Leave out entries that have no URL
        #[arg(long)]
        hide_unlinked: bool,
        /// Print the matches as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the category selector options
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(links_file) = cli.links_file {
        config.catalog.links_file = links_file;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let _guard = logging::init_logging(&config.logging);
            metrics::init_metrics();

            let catalog = open_catalog(&config)?;
            info!(
                links = catalog.len(),
                categories = catalog.categories().len(),
                source = %catalog.source().display(),
                "Catalog loaded"
            );
            metrics::record_catalog_size(catalog.len());

            web::serve(AppState::new(APP_NAME, catalog), &config.bind_addr()).await?;
        }
        Commands::List {
            query,
            category,
            hide_unlinked,
            json,
        } => {
            let mut logging_config = config.logging.clone();
            logging_config.file_logs = false;
            let _guard = logging::init_logging(&logging_config);

            let catalog = open_catalog(&config)?;
            let query = LinkQuery::new(
                query.unwrap_or_default(),
                CategorySelection::parse(&category),
                !hide_unlinked,
            );
            let shown = catalog.filter(&query);

            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                for item in &shown {
                    print_card(item);
                }
                println!(
                    "{} shown / {} total • Source: {}",
                    shown.len(),
                    catalog.len(),
                    catalog.source().display()
                );
            }
        }
        Commands::Categories => {
            let catalog = open_catalog(&config)?;
            for category in catalog.category_options() {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn open_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let path = &config.catalog.links_file;
    Catalog::open(path).with_context(|| format!("failed to load links from {}", path.display()))
}

fn print_card(item: &LinkItem) {
    println!("{}  [{}]  {}", item.name, item.category, item.badge().label());
    match &item.url {
        Some(url) => println!("   {}", url),
        None => println!("   (no link)"),
    }
    if !item.description.is_empty() {
        println!("   {}", item.description);
    }
    if !item.note.is_empty() {
        println!("   note: {}", item.note);
    }
    if !item.tags.is_empty() {
        println!("   tags: {}", item.display_tags().join(", "));
    }
    println!();
}
