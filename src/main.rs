use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use coursedeck::core::catalog::ModuleCatalog;
use coursedeck::core::config::{self, CliOverrides, ResolvedConfig};
use coursedeck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "coursedeck", about = "Browse AI/ML training modules in the terminal")]
struct Args {
    /// JSON file with module records (defaults to the builtin catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = config::load_config().map_err(io::Error::other)?;
    let resolved = config::resolve(
        &loaded.config,
        &CliOverrides {
            catalog_file: args.catalog,
            log_level: args.log_level,
        },
    );

    init_logging(&resolved);
    log::info!("coursedeck starting up");
    loaded.replay_notes();

    let catalog = match &resolved.catalog_file {
        Some(path) => ModuleCatalog::load(path),
        None => ModuleCatalog::builtin(),
    }
    .map_err(|e| {
        log::error!("Failed to load catalog: {}", e);
        io::Error::other(e)
    })?;

    if args.list {
        print_catalog(&catalog);
        return Ok(());
    }

    tui::run(&resolved, Arc::new(catalog))
}

/// File logger: the terminal belongs to the TUI, so logs never go to stdout.
fn init_logging(config: &ResolvedConfig) {
    let level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn print_catalog(catalog: &ModuleCatalog) {
    for module in catalog.modules() {
        println!("{:>3}  {}", module.id, module.title);
        if !module.topics.is_empty() {
            println!("     {}", module.topics.join(", "));
        }
    }
}
