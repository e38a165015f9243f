//! Tick task
//!
//! Idle until the face subscribes, then samples the clock every second and
//! forwards ticks whose changed units overlap the subscription.

use embassy_time::{Duration, Ticker};
use log::{debug, info};

use meridian_core::traits::{TimeSource, TimeUnits};

use crate::channels::{TickEvent, TICK_EVENTS, TICK_SUBSCRIBE};
use crate::clock::SystemClock;

/// Clock sampling interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - sends tick events for the subscribed units
#[embassy_executor::task]
pub async fn tick_task(clock: SystemClock) {
    info!("Tick task started");

    let mut units = TICK_SUBSCRIBE.wait().await;
    info!("Tick subscription: {:?}", units);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut last = clock.now();

    loop {
        ticker.next().await;

        // A later subscription replaces the earlier one
        if let Some(next) = TICK_SUBSCRIBE.try_take() {
            info!("Tick subscription changed: {:?}", next);
            units = next;
        }

        let now = clock.now();
        let changed = now.changed_since(&last);
        last = now;

        if let Some(changed) = reported_units(units, changed) {
            debug!("Tick {} (finest change {:?})", now.format().as_str(), changed.finest());
            TICK_EVENTS.send(TickEvent { time: now, units: changed }).await;
        }
    }
}

/// Units the tick task will report for a subscription
pub fn reported_units(subscribed: TimeUnits, changed: TimeUnits) -> Option<TimeUnits> {
    changed.intersects(subscribed).then_some(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_subscription_sees_every_change() {
        assert_eq!(
            reported_units(TimeUnits::SECOND, TimeUnits::SECOND),
            Some(TimeUnits::SECOND)
        );
        let rollover = TimeUnits::SECOND | TimeUnits::MINUTE;
        assert_eq!(reported_units(TimeUnits::SECOND, rollover), Some(rollover));
    }

    #[test]
    fn test_minute_subscription_skips_seconds() {
        assert_eq!(reported_units(TimeUnits::MINUTE, TimeUnits::SECOND), None);
        assert_eq!(reported_units(TimeUnits::MINUTE, TimeUnits::NONE), None);
    }
}
