use chrono::{DateTime, Local, Locale};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

/// Keeps the header's date/time display fresh.
///
/// Owns its ticking task; dropping the clock cancels the task, so a view
/// that tears down cannot leak a timer. Not a singleton: every header gets
/// its own instance.
pub struct HeaderClock {
    current: watch::Receiver<DateTime<Local>>,
    task: JoinHandle<()>,
}

impl HeaderClock {
    /// Starts ticking every `refresh`. The channel holds the start time
    /// until the first tick lands.
    pub fn start(refresh: Duration) -> Self {
        let (tx, rx) = watch::channel(Local::now());
        let task = tokio::spawn(async move {
            let mut ticker = interval(refresh);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval yields immediately once; the channel already holds now
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Local::now()).is_err() {
                    debug!("header clock has no subscribers left, stopping");
                    break;
                }
            }
        });
        Self { current: rx, task }
    }

    pub fn now(&self) -> DateTime<Local> {
        *self.current.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DateTime<Local>> {
        self.current.clone()
    }

    /// "lundi 10 mars 2025" — the locale is fixed, like the rest of the UI.
    pub fn date_line(&self) -> String {
        format_date_line(self.now())
    }

    /// "09:05"
    pub fn time_line(&self) -> String {
        format_time_line(self.now())
    }

    /// Explicit teardown; equivalent to dropping the clock.
    pub fn stop(self) {}
}

impl Drop for HeaderClock {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn format_date_line(now: DateTime<Local>) -> String {
    now.format_localized("%A %-d %B %Y", Locale::fr_FR).to_string()
}

pub fn format_time_line(now: DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_monday() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_date_line_is_french() {
        assert_eq!(format_date_line(fixed_monday()), "lundi 10 mars 2025");
    }

    #[test]
    fn test_time_line_is_zero_padded() {
        assert_eq!(format_time_line(fixed_monday()), "09:05");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_publishes_on_each_tick() {
        let clock = HeaderClock::start(Duration::from_secs(60));
        let mut updates = clock.subscribe();

        tokio::time::advance(Duration::from_secs(61)).await;
        updates.changed().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_clock_cancels_its_task() {
        let clock = HeaderClock::start(Duration::from_secs(60));
        let mut updates = clock.subscribe();
        drop(clock);

        // The sender side is gone once the task is aborted.
        tokio::time::advance(Duration::from_secs(120)).await;
        assert!(updates.changed().await.is_err());
    }
}
