use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wayfinder_api::RestApi;
use wayfinder_storage::{GraphManager, StorageBackend};

/// Weighted graph service with shortest path search
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(about = "Weighted graph service with shortest path search", long_about = None)]
struct Args {
    /// Path to the data directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level or filter directive, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Storage backend: memory, json or lmdb
    #[arg(long, default_value_t = StorageBackend::Json)]
    storage: StorageBackend,
}

/// RUST_LOG wins over `--log-level`; anything unparsable falls back to `info`.
fn log_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(rust_log.as_deref(), &args.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Wayfinder v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("Storage backend: {}", args.storage);
    info!("HTTP API port: {}", args.http_port);

    let manager = Arc::new(GraphManager::open(args.storage, &args.data_dir)?);
    info!("Storage initialized");

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(manager, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("Wayfinder started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(log_filter(None, "debug").to_string(), "debug");
        assert_eq!(
            log_filter(Some("wayfinder_storage=trace"), "debug").to_string(),
            "wayfinder_storage=trace"
        );
        assert_eq!(log_filter(Some("wayfinder=loud"), "warn").to_string(), "warn");
        assert_eq!(log_filter(None, "wayfinder=loud").to_string(), "info");
    }
}
