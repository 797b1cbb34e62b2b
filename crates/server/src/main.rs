use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slotbox_core::{
    create_actuator, load_config, validate_config, EventOrchestrator, HardwareCapabilities,
    JsonFileSettingsStore,
};
use slotbox_server::api::create_router;
use slotbox_server::state::AppState;

/// How long to wait for the trigger pump to drain on shutdown.
const PUMP_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("SLOTBOX_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("slotbox.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!(
        cycle_size = config.game.cycle_size,
        spin_duration_ms = config.game.spin_duration_ms,
        "Game configuration"
    );

    // Operator settings
    let settings = Arc::new(
        JsonFileSettingsStore::open(&config.game.settings_path).with_context(|| {
            format!(
                "Failed to open settings file {:?}",
                config.game.settings_path
            )
        })?,
    );
    info!("Settings loaded from {:?}", config.game.settings_path);

    // This build ships no pin-level drivers; an embedding program may inject
    // them through HardwareCapabilities.
    let hardware = HardwareCapabilities::none();
    if hardware.motor.is_none() {
        info!(
            stepper_pins = ?config.hardware.stepper_pins,
            "No motor driver available, spins are simulated"
        );
    }
    if hardware.sensor.is_none() {
        info!(
            ir_pin = config.hardware.ir_pin,
            "No trigger sensor available, only manual and simulated plays"
        );
    }

    let actuator = create_actuator(hardware.motor.clone(), Handle::current());
    info!("Using actuator: {}", actuator.kind());

    let mut orchestrator = EventOrchestrator::new(settings, actuator)
        .with_cycle_size(config.game.cycle_size)
        .with_spin_duration(config.game.spin_duration());
    if let Some(sensor) = hardware.sensor {
        orchestrator = orchestrator.with_sensor(sensor);
    }
    let orchestrator = Arc::new(orchestrator);

    // Spawn the task feeding sensor triggers into the orchestrator
    let pump_handle = orchestrator
        .trigger_pump()
        .map(|pump| tokio::spawn(pump.run()));

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), Arc::clone(&orchestrator)));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");
    orchestrator.shutdown();

    // The pump exits once the orchestrator drops its trigger handle.
    if let Some(handle) = pump_handle {
        match tokio::time::timeout(PUMP_SHUTDOWN_TIMEOUT, handle).await {
            Ok(_) => info!("Trigger pump stopped"),
            Err(_) => warn!("Trigger pump did not stop in time"),
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
