mod cli;

use signbridge::{config, server};
use signbridge_common::paths::{normalize_relative, resolve_under_root};
use signbridge_common::text::normalize_label;
use signbridge_db::pool::{get_conn, init_pool, DbPool};
use signbridge_db::{migrations, queries::words, seed};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn open_database(config: &config::Config) -> Result<DbPool> {
    let db_path = config.database.path.to_string_lossy();
    tracing::info!("Opening database at {}", db_path);
    init_pool(&db_path).with_context(|| format!("Failed to open database {}", db_path))
}

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config::validate_config(&config)?;

    tracing::info!("Starting signbridge server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    let db_pool = open_database(&config)?;

    server::start_server(config, db_pool).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "signbridge=debug,signbridge_db=debug,tower_http=debug".to_string()
        } else {
            "signbridge=info,signbridge_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::InitDb { no_seed } => init_db(cli.config.as_deref(), no_seed),
        Commands::AddWord { label, video_path } => {
            add_word(cli.config.as_deref(), &label, &video_path)
        }
        Commands::ListWords => list_words(cli.config.as_deref()),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("signbridge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_db(config_path: Option<&Path>, no_seed: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let pool = open_database(&config)?;
    server::prepare_video_dirs(&config)?;

    let conn = get_conn(&pool)?;
    let version = migrations::current_version(&conn)?;
    println!(
        "Database ready: {} (schema v{}/{})",
        config.database.path.display(),
        version,
        migrations::latest_version()
    );

    if no_seed {
        return Ok(());
    }

    let report = seed::seed_sample_words(&conn)?;
    for word in &report.added {
        println!("  Added: {}", word);
    }
    for word in &report.skipped {
        println!("  Already exists: {}", word);
    }
    println!(
        "{} added, {} already present",
        report.added.len(),
        report.skipped.len()
    );

    Ok(())
}

fn add_word(config_path: Option<&Path>, label: &str, video_path: &str) -> Result<()> {
    if normalize_label(label).is_empty() || video_path.trim().is_empty() {
        anyhow::bail!("label and video_path required");
    }

    let config = config::load_config_or_default(config_path)?;
    let video_path = normalize_relative(video_path.trim())?;

    let on_disk = resolve_under_root(&config.videos.root, &video_path)?;
    if !on_disk.is_file() {
        tracing::warn!("Clip does not exist yet: {:?}", on_disk);
    }

    let pool = open_database(&config)?;
    let conn = get_conn(&pool)?;
    let record = words::insert_word(&conn, label, &video_path)?;

    println!("Added '{}' -> {}", record.label, record.video_path);
    Ok(())
}

fn list_words(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let pool = open_database(&config)?;
    let conn = get_conn(&pool)?;

    let all = words::list_words(&conn)?;
    for word in &all {
        println!("{:<20} {}", word.label, word.video_path);
    }
    println!("{} word(s)", all.len());

    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    println!("Configuration is valid");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    if let Some(url) = &config.server.public_url {
        println!("  Public URL: {}", url);
    }
    println!("  Video root: {}", config.videos.root.display());
    println!("  Database: {}", config.database.path.display());

    Ok(())
}
