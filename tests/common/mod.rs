/*
 * Shared helpers for the tempdaemon integration tests
 *
 * Fake hwmon / thermal trees and a tracing layer counting error records.
 */

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tempdaemon::DaemonConfig;
use tempfile::TempDir;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Creates a hwmon directory where entry `i` becomes `temp{i+1}_input`;
/// `None` leaves that sensor missing.
pub fn fake_hwmon(readings: &[Option<&str>]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (i, reading) in readings.iter().enumerate() {
        if let Some(content) = reading {
            fs::write(dir.path().join(format!("temp{}_input", i + 1)), content).unwrap();
        }
    }
    dir
}

/// A hwmon chip plus a cooling device whose `cur_state` starts at 5.
pub struct FakeMachine {
    pub hwmon: TempDir,
    pub thermal: TempDir,
}

impl FakeMachine {
    pub fn new(readings: [Option<&str>; 5]) -> Self {
        let hwmon = fake_hwmon(&readings);
        let thermal = TempDir::new().unwrap();
        fs::write(thermal.path().join("cur_state"), "5\n").unwrap();
        Self { hwmon, thermal }
    }

    pub fn cur_state(&self) -> PathBuf {
        self.thermal.path().join("cur_state")
    }

    pub fn config(&self) -> DaemonConfig {
        DaemonConfig {
            sensor_base: self.hwmon.path().to_path_buf(),
            cooling_state: self.cur_state(),
            poll_interval: Duration::ZERO,
        }
    }

    pub fn fan_state(&self) -> String {
        fs::read_to_string(self.cur_state()).unwrap()
    }
}

#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` under a scoped subscriber and reports how many error records it emitted.
pub fn count_errors<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.0.load(Ordering::SeqCst))
}
