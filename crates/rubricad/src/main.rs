// # rubricad - Rubrica Daemon
//
// Thin integration layer: configuration, logging, runtime and the HTTP
// listener. All directory logic lives in rubrica-core, all request
// translation in rubrica-http.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `RUBRICA_DEFAULT_FIRST_NAME`: First name stored when a contact is created
//   without one (default: Sconosciuto)
// - `RUBRICA_BIND_ADDR`: Listen address (default: 0.0.0.0:8080)
// - `RUBRICA_SHUTDOWN_TIMEOUT_SECS`: Time allowed for in-flight requests after
//   a shutdown signal (default: 30)
// - `RUBRICA_LOG_LEVEL`: trace, debug, info, warn or error (default: info)
//
// ## Example
//
// ```bash
// export RUBRICA_DEFAULT_FIRST_NAME=Mario
// export RUBRICA_BIND_ADDR=127.0.0.1:8080
//
// rubricad
// ```

use anyhow::{Context, Result};
use rubrica_core::{ContactDirectory, RubricaConfig};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Exit codes for different termination scenarios
///
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum RubricaExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<RubricaExitCode> for ExitCode {
    fn from(code: RubricaExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
#[derive(Debug)]
struct Config {
    rubrica: RubricaConfig,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut rubrica = RubricaConfig::new();

        if let Some(name) = lookup("RUBRICA_DEFAULT_FIRST_NAME") {
            rubrica.directory.default_first_name = name;
        }
        if let Some(addr) = lookup("RUBRICA_BIND_ADDR") {
            rubrica.server.bind_addr = addr;
        }
        if let Some(secs) = lookup("RUBRICA_SHUTDOWN_TIMEOUT_SECS") {
            rubrica.server.shutdown_timeout_secs = secs.trim().parse().with_context(|| {
                format!("RUBRICA_SHUTDOWN_TIMEOUT_SECS must be a number of seconds. Got: {secs}")
            })?;
        }

        Ok(Self {
            rubrica,
            log_level: lookup("RUBRICA_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.rubrica.validate()?;
        self.level()?;
        Ok(())
    }

    /// Parse the configured log level
    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "RUBRICA_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return RubricaExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return RubricaExitCode::ConfigError.into();
    }

    let log_level = config.level().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return RubricaExitCode::ConfigError.into();
    }

    info!("Starting rubricad daemon");

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return RubricaExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run_daemon(config).await {
            error!("Daemon error: {:#}", e);
            RubricaExitCode::RuntimeError
        } else {
            RubricaExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Run the daemon until a shutdown signal arrives
async fn run_daemon(config: Config) -> Result<()> {
    let RubricaConfig { directory, server } = config.rubrica;

    info!("Default first name: {}", directory.default_first_name);
    let directory = Arc::new(ContactDirectory::new(directory)?);
    let app = rubrica_http::router(directory);

    let addr = server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut serve = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut serve => {
            result.context("HTTP server task panicked")??;
            anyhow::bail!("HTTP server stopped unexpectedly");
        }
        signal = wait_for_shutdown_signal() => {
            info!("Received shutdown signal: {}", signal?);
        }
    }

    info!("Shutting down daemon");
    let _ = shutdown_tx.send(());

    let drain = Duration::from_secs(server.shutdown_timeout_secs);
    match tokio::time::timeout(drain, serve).await {
        Ok(result) => {
            result.context("HTTP server task panicked")??;
            info!("HTTP server stopped");
            Ok(())
        }
        Err(_) => Err(anyhow::anyhow!("Shutdown timeout after {:?}", drain)),
    }
}

/// Wait for shutdown signals (SIGTERM, SIGINT)
///
/// # Returns
///
/// Returns the name of the signal received.
#[cfg(unix)]
async fn wait_for_shutdown_signal() -> Result<&'static str> {
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?;
    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?;

    Ok(tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    })
}

/// Wait for shutdown signals (SIGINT only)
///
/// Fallback implementation for non-Unix platforms.
#[cfg(not(unix))]
async fn wait_for_shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
    Ok("SIGINT")
}
