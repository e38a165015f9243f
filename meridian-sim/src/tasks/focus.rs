//! Focus task
//!
//! Stands in for the host lifecycle: the application gains focus once,
//! shortly after launch.

use embassy_time::{Duration, Timer};
use log::info;

use crate::channels::FOCUS;

/// Focus task - signals focus gained after `delay_ms`
#[embassy_executor::task]
pub async fn focus_task(delay_ms: u32) {
    info!("Focus task started");

    Timer::after(Duration::from_millis(delay_ms as u64)).await;

    info!("Application gained focus");
    FOCUS.signal(true);
}
