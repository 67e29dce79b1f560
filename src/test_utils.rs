/*
 * Test utilities for tempdaemon
 *
 * Fake sysfs trees and a tracing layer counting error records, shared by
 * the unit test modules.
 */

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

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
