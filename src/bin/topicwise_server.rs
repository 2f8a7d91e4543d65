//! topicwise gRPC Server
//!
//! A standalone server binary exposing the topic resolver over gRPC.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use topicwise::defaults::portfolio_catalog;
use topicwise::transport::TopicServiceImpl;
use topicwise::{ResolutionEngine, ResolverConfig, TopicCatalog, TopicError, TransportError};

/// Default port when neither `--port` nor `PORT` is set.
const DEFAULT_PORT: u16 = 8000;

/// Server configuration
struct Config {
    /// Address to bind to
    addr: SocketAddr,
    /// Optional JSON catalog; the built-in portfolio catalog otherwise
    catalog_path: Option<PathBuf>,
    /// Optional JSON resolver configuration
    config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            catalog_path: None,
            config_path: None,
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

fn parse_port(value: &str) -> u16 {
    value
        .parse()
        .unwrap_or_else(|_| fail(&format!("invalid port number: {value}")))
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    if let Ok(port) = std::env::var("PORT") {
        config.addr.set_port(parse_port(&port));
    }

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--port" | "-p" => {
                let value = value.unwrap_or_else(|| fail("--port requires a value"));
                config.addr.set_port(parse_port(value));
                i += 2;
            }
            "--host" => {
                let value = value.unwrap_or_else(|| fail("--host requires a value"));
                let ip: IpAddr = value
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("invalid host address: {value}")));
                config.addr.set_ip(ip);
                i += 2;
            }
            "--catalog" | "-c" => {
                let value = value.unwrap_or_else(|| fail("--catalog requires a value"));
                config.catalog_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--config" => {
                let value = value.unwrap_or_else(|| fail("--config requires a value"));
                config.config_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--help" | "-h" => {
                println!("topicwise-server - topic resolver gRPC server");
                println!();
                println!("USAGE:");
                println!("    topicwise-server [OPTIONS]");
                println!();
                println!("OPTIONS:");
                println!("    -p, --port <PORT>         Port to listen on [env: PORT] [default: 8000]");
                println!("        --host <ADDR>         Address to bind [default: 0.0.0.0]");
                println!("    -c, --catalog <FILE>      JSON topic catalog [default: built-in portfolio]");
                println!("        --config <FILE>       JSON resolver configuration");
                println!("    -h, --help                Print help information");
                println!();
                println!("Log filtering is read from TOPICWISE_LOG [default: info].");
                std::process::exit(0);
            }
            arg => fail(&format!("unknown argument: {arg}")),
        }
    }

    config
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TOPICWISE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn build_engine(config: &Config) -> Result<ResolutionEngine, TopicError> {
    let catalog = match &config.catalog_path {
        Some(path) => TopicCatalog::from_path(path)?,
        None => portfolio_catalog()?,
    };
    let resolver_config = match &config.config_path {
        Some(path) => ResolverConfig::from_path(path)?,
        None => ResolverConfig::default(),
    };
    Ok(ResolutionEngine::with_config(
        Arc::new(catalog),
        resolver_config,
    )?)
}

#[tokio::main]
async fn main() -> Result<(), TopicError> {
    let config = parse_args();
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "topicwise server starting");

    let engine = build_engine(&config)?;
    info!(
        topics = engine.catalog().len(),
        digest = %engine.catalog().digest(),
        threshold = engine.config().match_threshold,
        margin = engine.config().ambiguity_margin,
        "catalog ready"
    );

    let svc = TopicServiceImpl::new(Arc::new(engine)).into_server();

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|e| TransportError::BindFailed {
            addr: config.addr.to_string(),
            message: e.to_string(),
        })?;
    info!(addr = %config.addr, "starting gRPC server, press Ctrl+C to stop");

    Server::builder()
        .add_service(svc)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await
        .map_err(|e| TransportError::ServeFailed {
            message: e.to_string(),
        })?;

    info!("shut down");
    Ok(())
}
