//! Actuator bridge: entry point.
//!
//! Receives short text commands and relays them to an actuator controller as
//! single-character TCP frames.
//!
//! # Usage
//!
//! ```text
//! actuator-bridge [OPTIONS]
//!
//! Options:
//!   --config <PATH>             Optional TOML config file
//!   --alphabet <motion|color>   Command vocabulary [default: motion]
//!   --listen-host <IP>          UDP bind address [default: 0.0.0.0]
//!   --listen-port <PORT>        UDP port [default: 5005]
//!   --actuator-host <IP>        Actuator IP [default: 192.168.31.185]
//!   --actuator-port <PORT>      Actuator TCP port [default: 80]
//!   --connect-timeout-ms <MS>   TCP connect bound [default: 3000]
//!   --write-timeout-ms <MS>     Frame write bound [default: 3000]
//!   --no-console                Do not read commands from stdin
//! ```
//!
//! Every option except `--no-console` can also be set through a `BRIDGE_*`
//! environment variable.  Precedence: CLI flag, then environment, then the
//! config file, then the built-in default.
//!
//! # Process lifetime
//!
//! ```text
//! motion:  [UDP listener task] ─────────────────────────── until Ctrl+C
//!          [console]  ──── until `exit` / EOF
//! color:   [console]  ──── until `exit` / EOF  → process exits
//! ```
//!
//! Leaving the console never stops the UDP listener.  A listener that cannot
//! bind its port is fatal: the process reports the cause and exits non-zero.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use actuator_bridge::application::{run_console, CommandSink};
use actuator_bridge::domain::BridgeConfig;
use actuator_bridge::infrastructure::storage::config::{load_config_file, BridgeFile};
use actuator_bridge::infrastructure::{ActuatorClient, DatagramListener};
use actuator_core::Alphabet;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// UDP-to-TCP command bridge for single-character actuator controllers.
#[derive(Debug, Parser)]
#[command(
    name = "actuator-bridge",
    about = "Relays text motion or color commands to an actuator controller",
    version
)]
struct Cli {
    /// TOML config file supplying defaults for every other option.
    #[arg(long, env = "BRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Command vocabulary: `motion` (UDP + console) or `color` (console only).
    #[arg(long, env = "BRIDGE_ALPHABET")]
    alphabet: Option<Alphabet>,

    /// IP address the UDP listener binds to.
    #[arg(long, env = "BRIDGE_LISTEN_HOST")]
    listen_host: Option<IpAddr>,

    /// UDP port for inbound command datagrams.
    #[arg(long, env = "BRIDGE_LISTEN_PORT")]
    listen_port: Option<u16>,

    /// IP address of the actuator controller.
    #[arg(long, env = "BRIDGE_ACTUATOR_HOST")]
    actuator_host: Option<IpAddr>,

    /// TCP port of the actuator controller.
    #[arg(long, env = "BRIDGE_ACTUATOR_PORT")]
    actuator_port: Option<u16>,

    /// Maximum time to establish each actuator connection, in milliseconds.
    #[arg(long, env = "BRIDGE_CONNECT_TIMEOUT_MS")]
    connect_timeout_ms: Option<u64>,

    /// Maximum time to write each frame, in milliseconds.
    #[arg(long, env = "BRIDGE_WRITE_TIMEOUT_MS")]
    write_timeout_ms: Option<u64>,

    /// Disable the stdin console (motion alphabet only).
    #[arg(long)]
    no_console: bool,
}

impl Cli {
    /// Loads the config file named by `--config`, or the built-in defaults.
    fn load_file(&self) -> anyhow::Result<BridgeFile> {
        match &self.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("cannot load config file {}", path.display())),
            None => Ok(BridgeFile::default()),
        }
    }

    /// Overwrites the file's settings with whatever was given on the command
    /// line or in the environment.
    fn apply_overrides(&self, mut file: BridgeFile) -> BridgeFile {
        if let Some(alphabet) = self.alphabet {
            file.bridge.alphabet = alphabet;
        }
        if self.no_console {
            file.bridge.console = false;
        }
        let net = &mut file.network;
        if let Some(host) = self.listen_host {
            net.listen_host = host.to_string();
        }
        if let Some(port) = self.listen_port {
            net.listen_port = port;
        }
        if let Some(host) = self.actuator_host {
            net.actuator_host = host.to_string();
        }
        if let Some(port) = self.actuator_port {
            net.actuator_port = port;
        }
        if let Some(ms) = self.connect_timeout_ms {
            net.connect_timeout_ms = ms;
        }
        if let Some(ms) = self.write_timeout_ms {
            net.write_timeout_ms = ms;
        }
        file
    }
}

/// Builds and validates the runtime configuration.
///
/// # Errors
///
/// Returns an error if an address is invalid or the combination of settings
/// would leave the bridge with no ingress at all.
fn into_bridge_config(file: &BridgeFile) -> anyhow::Result<BridgeConfig> {
    let config = file
        .to_bridge_config()
        .context("invalid bridge configuration")?;

    if !config.console && !config.listener_enabled() {
        anyhow::bail!(
            "the {} bridge has no datagram listener, so the console cannot be disabled",
            config.alphabet
        );
    }
    Ok(config)
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file = cli.apply_overrides(cli.load_file()?);

    // Logs go to stderr so they never interleave with the console prompt.
    // `RUST_LOG` wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&file.bridge.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = into_bridge_config(&file)?;

    info!(
        "actuator bridge starting: alphabet={}, actuator={}",
        config.alphabet, config.actuator_addr
    );

    run_bridge(config).await?;

    info!("actuator bridge stopped");
    Ok(())
}

/// Starts the listener (motion only) and the console, then waits according to
/// the lifetime rules described in the module docs.
async fn run_bridge(config: BridgeConfig) -> anyhow::Result<()> {
    let sink: Arc<dyn CommandSink> = Arc::new(ActuatorClient::from_config(&config));

    let listener_task = if config.listener_enabled() {
        let listener = DatagramListener::bind(config.listen_addr, config.max_datagram_len)
            .await
            .context("cannot start the datagram listener")?;
        Some(tokio::spawn(listener.run(config.alphabet, Arc::clone(&sink))))
    } else {
        None
    };

    if config.console {
        let stdin = BufReader::new(tokio::io::stdin());
        run_console(config.alphabet, stdin, tokio::io::stdout(), sink.as_ref())
            .await
            .context("console I/O failed")?;
    }

    let Some(mut listener_task) = listener_task else {
        return Ok(());
    };

    info!("datagram listener still running; press Ctrl+C to stop");
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => info!("received Ctrl+C; shutting down"),
                Err(e) => error!("failed to listen for Ctrl+C signal: {e}"),
            }
            listener_task.abort();
        }
        joined = &mut listener_task => {
            // `run` never returns, so reaching this arm means the task panicked.
            joined.context("datagram listener task failed")?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
