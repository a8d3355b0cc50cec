//! Repeating one-second tick source for the question countdown.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable repeating tick.
///
/// Each `start` aborts the previous task and replaces its channel, so ticks
/// from an old countdown can never reach the new one.
pub struct Ticker {
    period: Duration,
    epoch: Option<u64>,
    handle: Option<JoinHandle<()>>,
    rx: Option<mpsc::UnboundedReceiver<()>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            epoch: None,
            handle: None,
            rx: None,
        }
    }

    /// Epoch of the countdown this ticker is driving.
    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, epoch: u64) {
        self.clear();

        let (tx, rx) = mpsc::unbounded_channel();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        self.epoch = Some(epoch);
        self.handle = Some(handle);
        self.rx = Some(rx);
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.rx = None;
        self.epoch = None;
    }

    /// Follow the countdown the session reports: restart on a new epoch,
    /// stop when no countdown is active.
    pub fn sync(&mut self, active: Option<u64>) {
        match active {
            Some(epoch) if self.epoch != Some(epoch) => self.start(epoch),
            Some(_) => {}
            None if self.is_running() => self.clear(),
            None => {}
        }
    }

    /// Number of ticks delivered since the last call.
    pub fn drain(&mut self) -> usize {
        let Some(rx) = self.rx.as_mut() else {
            return 0;
        };
        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        ticks
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance_secs(secs: u64) {
        for _ in 0..secs {
            time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let mut ticker = Ticker::default();
        ticker.start(1);
        tokio::task::yield_now().await;
        assert_eq!(ticker.drain(), 0);

        advance_secs(3).await;
        assert_eq!(ticker.drain(), 3);
        assert_eq!(ticker.drain(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_stops_ticks() {
        let mut ticker = Ticker::default();
        ticker.start(1);
        ticker.clear();
        assert!(!ticker.is_running());

        advance_secs(2).await;
        assert_eq!(ticker.drain(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_drops_stale_ticks() {
        let mut ticker = Ticker::default();
        ticker.start(1);
        advance_secs(2).await;

        ticker.start(2);
        assert_eq!(ticker.drain(), 0);
        assert_eq!(ticker.epoch(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_follows_epoch() {
        let mut ticker = Ticker::default();
        ticker.sync(Some(4));
        assert_eq!(ticker.epoch(), Some(4));
        assert!(ticker.is_running());

        ticker.sync(Some(4));
        assert_eq!(ticker.epoch(), Some(4));

        ticker.sync(None);
        assert!(!ticker.is_running());
        assert_eq!(ticker.epoch(), None);
    }
}
