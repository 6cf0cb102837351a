//! Time-paced counter event stream.
//!
//! Emits a bounded sequence of [`CounterEvent`]s, one per tick. The first
//! event arrives one interval after subscription. The stream ends when the
//! bound is reached, when its cancellation token fires, or when the consumer
//! drops it; in every case the interval timer is released with the stream.

use std::time::Duration;

use futures_util::stream::{self, Stream, StreamExt};
use roster_core::CounterEvent;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Shortest accepted tick interval. `tokio` rejects a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Pacing and bounds for the counter stream.
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Number of events emitted by an uncancelled subscription.
    pub events: u64,
    /// Minimum spacing between consecutive events.
    pub interval: Duration,
    /// Interval between SSE keep-alive comments on idle connections.
    pub keep_alive: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            events: 10,
            interval: Duration::from_secs(1),
            keep_alive: Duration::from_secs(15),
        }
    }
}

struct Ticker {
    interval: Interval,
    next: u64,
    limit: u64,
    cancel: CancellationToken,
}

/// Builds a fresh counter stream. Each call is an independent subscription.
///
/// Must be called from within a tokio runtime.
pub fn counter_events(
    config: &CounterConfig,
    cancel: CancellationToken,
) -> impl Stream<Item = CounterEvent> + Send + 'static {
    let period = config.interval.max(MIN_INTERVAL);
    let mut interval = time::interval_at(Instant::now() + period, period);
    // A slow consumer must never see two events closer than `period`.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ticker = Ticker {
        interval,
        next: 0,
        limit: config.events,
        cancel,
    };

    stream::unfold(ticker, |mut ticker| async move {
        if ticker.next >= ticker.limit {
            debug!(emitted = ticker.next, "counter stream exhausted");
            return None;
        }
        tokio::select! {
            biased;
            () = ticker.cancel.cancelled() => {
                debug!(emitted = ticker.next, "counter stream cancelled");
                None
            }
            _ = ticker.interval.tick() => {
                let event = CounterEvent::new(ticker.next);
                ticker.next += 1;
                Some((event, ticker))
            }
        }
    })
    .fuse()
}
