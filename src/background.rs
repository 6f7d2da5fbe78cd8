use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Buffer size for the tick channel
const TICK_CHANNEL_BUFFER_SIZE: usize = 4;

/// Shortest accepted tick period; `tokio::time::interval` rejects zero
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a settable instant, for tests and screenshots
#[derive(Debug)]
pub struct FixedClock {
    instant: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        if let Ok(mut current) = self.instant.lock() {
            *current = instant;
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        if let Ok(mut current) = self.instant.lock() {
            *current += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.instant.lock() {
            Ok(instant) => *instant,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// "Updated N minutes ago" text for the status bar
pub fn updated_label(last: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - last).num_minutes();
    match minutes {
        m if m < 1 => "Updated just now".to_string(),
        1 => "Updated 1 minute ago".to_string(),
        m => format!("Updated {} minutes ago", m),
    }
}

/// Interval task that sends the clock's time on every tick
///
/// The task lives as long as the handle: dropping the ticker aborts it.
pub struct RefreshTicker {
    handle: JoinHandle<()>,
}

impl RefreshTicker {
    /// Spawn the ticker on the current tokio runtime
    ///
    /// The first tick fires one full `interval` after start. Intervals
    /// below `MIN_TICK_INTERVAL` are raised to it.
    pub fn start<C>(
        clock: Arc<C>,
        interval: Duration,
    ) -> (Self, mpsc::Receiver<DateTime<Utc>>)
    where
        C: Clock + ?Sized + 'static,
    {
        let interval = interval.max(MIN_TICK_INTERVAL);
        let (tx, rx) = mpsc::channel(TICK_CHANNEL_BUFFER_SIZE);
        let handle = tokio::spawn(tick_loop(clock, interval, tx));
        debug!("TICKER: started with interval {:?}", interval);
        (Self { handle }, rx)
    }

    /// Replace the ticker held in `slot`, aborting the previous one
    pub fn replace<C>(
        slot: &mut Option<RefreshTicker>,
        clock: Arc<C>,
        interval: Duration,
    ) -> mpsc::Receiver<DateTime<Utc>>
    where
        C: Clock + ?Sized + 'static,
    {
        let (ticker, rx) = Self::start(clock, interval);
        if slot.replace(ticker).is_some() {
            debug!("TICKER: replaced running ticker");
        }
        rx
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("TICKER: stopped");
    }
}

async fn tick_loop<C>(clock: Arc<C>, interval: Duration, tx: mpsc::Sender<DateTime<Utc>>)
where
    C: Clock + ?Sized,
{
    let mut interval_timer = tokio::time::interval(interval);
    interval_timer.tick().await; // First tick completes immediately

    loop {
        tokio::select! {
            _ = interval_timer.tick() => {
                if tx.send(clock.now()).await.is_err() {
                    // Receiver gone, nobody is listening
                    break;
                }
            }
            _ = tx.closed() => break,
        }
    }
}
