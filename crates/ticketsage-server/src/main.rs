//! TicketSage: support ticket classification server.

use std::path::PathBuf;
use std::sync::Arc;

use ticketsage_core::TicketSageConfig;
use ticketsage_runtime::PipelineContext;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("TICKETSAGE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

/// Train the pipeline off the async runtime; nothing is served until it is done.
async fn build_pipeline(config: &TicketSageConfig) -> anyhow::Result<PipelineContext> {
    let config = config.clone();
    let pipeline = tokio::task::spawn_blocking(move || PipelineContext::from_config(&config))
        .await?
        .map_err(|e| anyhow::anyhow!("Failed to initialize ticket model: {}", e))?;
    Ok(pipeline)
}

fn print_help() {
    println!("TicketSage: support ticket classification server");
    println!();
    println!("Usage: ticketsage [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Train the model and start the server");
    println!("  classify <text...>       Generate a ticket for the given text and print it");
    println!("  stats                    Train the model and print its summary");
    println!("  help                     Show this help message");
    println!();
    println!("Environment:");
    println!("  TICKETSAGE_DATA_DIR      Data directory (default: ./data)");
    println!("  TICKETSAGE_CORPUS        Corpus file, relative to the data directory");
    println!("  TICKETSAGE_TEXT_COLUMN   Text field name (default: Document)");
    println!("  TICKETSAGE_LABEL_COLUMN  Label field name (default: Topic_group)");
    println!("  TICKETSAGE_MAX_FEATURES  Vocabulary cap (default: 5000)");
    println!("  TICKETSAGE_ALPHA         Naive Bayes smoothing (default: 1.0)");
    println!("  PORT                     HTTP port (default: 8501)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            "classify" => {
                if args.len() < 3 {
                    eprintln!("Usage: ticketsage classify <text...>");
                    std::process::exit(1);
                }
                let text = args[2..].join(" ");
                let config = TicketSageConfig::from_env(&data_dir)?;
                let pipeline = build_pipeline(&config).await?;
                let outcome = pipeline.generate_ticket(&text);
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }
            "stats" => {
                let config = TicketSageConfig::from_env(&data_dir)?;
                let pipeline = build_pipeline(&config).await?;
                println!("{}", serde_json::to_string_pretty(pipeline.summary())?);
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'ticketsage help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let config = TicketSageConfig::from_env(&data_dir)?;
    let port = config.port;

    let pipeline = build_pipeline(&config).await?;

    // Build application state
    let state = Arc::new(AppState::new(config, pipeline));

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("TicketSage server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
