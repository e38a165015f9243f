//! Meridian - watch face simulator
//!
//! Runs the watch face core on the host. The tasks here play the parts a
//! watch platform would: wall clock, app focus, animation scheduler, tick
//! service and display. The face itself only ever sees the collaborator
//! traits from `meridian-core`.

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use log::{error, info};

use meridian_core::traits::TimeSource;

use crate::clock::SystemClock;
use crate::config::SimConfig;
use crate::error::SimError;

mod canvas;
mod channels;
mod clock;
mod config;
mod easing;
mod error;
mod tasks;

/// Default log filter when `RUST_LOG` is unset
const DEFAULT_LOG_SPEC: &str = "info";

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let _logger = match init_logging() {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("meridian-sim: {}", e);
            std::process::exit(1);
        }
    };

    info!("Meridian simulator starting...");

    let config = match SimConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", SimError::from(e));
            std::process::exit(1);
        }
    };
    let run_seconds = config.run_seconds;

    if let Err(e) = spawn_tasks(&spawner, config) {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("All tasks spawned, simulator running");

    // All work happens in the spawned tasks; main only enforces the run limit
    shutdown_after(run_seconds).await;

    info!("Run time elapsed, Meridian simulator stopped");
    std::process::exit(0);
}

/// Start the logger backend
fn init_logging() -> Result<flexi_logger::LoggerHandle, SimError> {
    let handle = flexi_logger::Logger::try_with_env_or_str(DEFAULT_LOG_SPEC)?.start()?;
    Ok(handle)
}

/// Build the clock and spawn every task
fn spawn_tasks(spawner: &Spawner, config: SimConfig) -> Result<(), SimError> {
    let clock = match config.start_time()? {
        Some(start) => SystemClock::starting_at(start),
        None => SystemClock::new(),
    };
    info!(
        "Clock at {} (offset {} s)",
        clock.now().format().as_str(),
        clock.offset_s()
    );

    spawner.spawn(tasks::focus_task(config.focus_delay_ms))?;
    spawner.spawn(tasks::animation_task(config.frame_interval_ms))?;
    spawner.spawn(tasks::tick_task(clock))?;
    spawner.spawn(tasks::face_task(clock, config.face))?;
    spawner.spawn(tasks::display_task(config.canvas, config.render))?;

    Ok(())
}

/// Resolve after `run_seconds`, or never
async fn shutdown_after(run_seconds: Option<u32>) {
    match run_seconds {
        Some(secs) => Timer::after(Duration::from_secs(secs as u64)).await,
        None => core::future::pending::<()>().await,
    }
}
