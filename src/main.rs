use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use podcatcher::cli::{Action, Cli};
use podcatcher::config::Config;
use podcatcher::errors::{PodcatcherError, PodcatcherResult};
use podcatcher::selection::FilterSpec;
use podcatcher::services::{
    render_all, submit_downloads, Aria2Downloader, CacheService, CatalogService, JsonRenderer,
    TextRenderer,
};
use podcatcher::sources::HttpFeedFetcher;
use podcatcher::storage::{
    FileSubscriptionRegistry, SqliteSnapshotRepository, SqliteStorage, SubscriptionRegistry,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> PodcatcherResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    let registry = FileSubscriptionRegistry::load(&config.registry_path)?;

    // Validate every option before any feed is touched
    let spec = cli.filter_criteria().into_spec(&registry.list_names())?;

    // Initialize snapshot storage
    let storage = SqliteStorage::new(&config.cache_db_path)?;
    let snapshots = SqliteSnapshotRepository::new(storage);

    match cli.action() {
        Action::UpdateCache => cmd_update_cache(registry, snapshots, &spec),
        Action::List => cmd_list(snapshots, &spec, cli.json),
        Action::Download => cmd_download(snapshots, &spec, &config),
    }
}

fn cmd_update_cache(
    registry: FileSubscriptionRegistry,
    snapshots: SqliteSnapshotRepository,
    spec: &FilterSpec,
) -> PodcatcherResult<()> {
    let service = CacheService::new(registry, snapshots, HttpFeedFetcher::new());

    println!("Please wait while feeds are being cached\n");

    let result = service.update(spec.subscription_names());

    for (name, count) in &result.updated {
        println!("  + {} ({} episodes)", name, count);
    }
    for (name, error) in &result.failed {
        println!("  ! {}: {}", name, error);
    }
    println!();

    println!(
        "Cache update complete: {} updated, {} failed",
        result.updated.len(),
        result.failed.len()
    );

    if result.failed.is_empty() {
        Ok(())
    } else {
        Err(PodcatcherError::CacheUpdate(result.failed.len()))
    }
}

fn cmd_list(
    snapshots: SqliteSnapshotRepository,
    spec: &FilterSpec,
    json: bool,
) -> PodcatcherResult<()> {
    let catalog = CatalogService::new(snapshots);
    let selections = catalog.select(spec)?;

    let stdout = io::stdout();
    if json {
        let mut renderer = JsonRenderer::new(stdout.lock());
        render_all(&mut renderer, &selections)?;
        renderer.into_inner().flush()?;
    } else {
        let mut renderer = TextRenderer::new(stdout.lock());
        render_all(&mut renderer, &selections)?;
        renderer.into_inner().flush()?;
    }

    Ok(())
}

fn cmd_download(
    snapshots: SqliteSnapshotRepository,
    spec: &FilterSpec,
    config: &Config,
) -> PodcatcherResult<()> {
    let catalog = CatalogService::new(snapshots);
    let selections = catalog.select(spec)?;

    let downloader = Aria2Downloader::new(
        config.downloader_program.clone(),
        config.downloader_input_path.clone(),
    );
    let count = submit_downloads(&downloader, &selections, &config.download_root)?;

    if count == 0 {
        println!("No episodes matched, nothing to download.");
    } else {
        println!(
            "Queued {} episodes for download into {}",
            count,
            config.download_root.display()
        );
    }

    Ok(())
}
