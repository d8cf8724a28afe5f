//! folio-validate - check a site config and run headless behavior simulations.
//!
//! Usage:
//!   folio-validate check --path site.toml
//!   folio-validate defaults
//!   folio-validate carousel --items 3 --run-ms 30000 --hover-at 9000 --leave-at 12000
//!   folio-validate highlight --viewport 900 --section about:-400:800 --section skills:400:700

mod simulate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use folio_core::ObserverOptions;
use folio_core::config::{load_file, validate};
use folio_types::SiteConfig;
use simulate::HoverEvent;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Validate folio site configs and simulate page behaviors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a site.toml
    Check {
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Print the built-in defaults as TOML
    Defaults,
    /// Simulate testimonial autoplay on a manual clock
    Carousel {
        #[arg(short, long, default_value_t = 3)]
        items: usize,
        #[arg(short, long, default_value_t = 30_000)]
        run_ms: u64,
        /// Pointer enters the wrapper at this time (ms)
        #[arg(long)]
        hover_at: Option<u64>,
        /// Pointer leaves the wrapper at this time (ms)
        #[arg(long)]
        leave_at: Option<u64>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Resolve the highlighted nav entry for a set of section positions
    Highlight {
        #[arg(short, long)]
        viewport: f64,
        /// Section as id:top:height, in document order
        #[arg(short, long = "section", required = true)]
        sections: Vec<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Initialize logging to stderr, honoring RUST_LOG.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => check(&path),
        Commands::Defaults => {
            let text = toml::to_string_pretty(&SiteConfig::default()).map_err(|e| e.to_string())?;
            print!("{text}");
            Ok(())
        }
        Commands::Carousel {
            items,
            run_ms,
            hover_at,
            leave_at,
            config,
        } => {
            let config = load_or_default(config.as_deref())?;
            let hovers: Vec<_> = [
                hover_at.map(|at| (at, HoverEvent::Enter)),
                leave_at.map(|at| (at, HoverEvent::Leave)),
            ]
            .into_iter()
            .flatten()
            .collect();

            let steps = simulate::run_carousel(items, config.carousel.interval_ms, run_ms, &hovers);
            for step in steps {
                println!("{:>8} ms  {}", step.at_ms, step.what);
            }
            Ok(())
        }
        Commands::Highlight {
            viewport,
            sections,
            config,
        } => {
            let config = load_or_default(config.as_deref())?;
            let sections = sections
                .iter()
                .map(|s| simulate::parse_section(s))
                .collect::<Result<Vec<_>, _>>()?;
            let options = ObserverOptions::from(&config.highlight);
            match simulate::run_highlight(&sections, viewport, options) {
                Some(id) => println!("active: {id}"),
                None => println!("active: none"),
            }
            Ok(())
        }
    }
}

fn check(path: &Path) -> Result<(), String> {
    let config = load_file(path).map_err(|e| e.to_string())?;
    let issues = validate(&config);
    if issues.is_empty() {
        println!("{}: ok", path.display());
        return Ok(());
    }
    for issue in &issues {
        println!("{}: {issue}", path.display());
    }
    Err(format!("{} issue(s) found", issues.len()))
}

fn load_or_default(path: Option<&Path>) -> Result<SiteConfig, String> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let config = load_file(path).map_err(|e| e.to_string())?;
    let issues = validate(&config);
    if let Some(issue) = issues.first() {
        return Err(format!("{}: {issue}", path.display()));
    }
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
