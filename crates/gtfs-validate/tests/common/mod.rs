//! Shared fakes for rule tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use gtfs_model::FeedInfo;
use gtfs_validate::{Clock, GtfsDataRepository, InMemoryGtfsData};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Repository that counts how often its records are fetched.
#[derive(Default)]
pub struct CountingRepository {
    data: InMemoryGtfsData,
    fetches: AtomicUsize,
}

impl CountingRepository {
    pub fn new(data: InMemoryGtfsData) -> Self {
        Self {
            data,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_feed_info(publisher_name: &str, feed_info: FeedInfo) -> Self {
        let mut data = InMemoryGtfsData::new();
        data.insert_feed_info_as(publisher_name, feed_info);
        Self::new(data)
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl GtfsDataRepository for CountingRepository {
    fn feed_info_all(&self) -> &BTreeMap<String, FeedInfo> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.data.feed_info_all()
    }
}

/// Clock pinned to one date that counts how often it is asked.
pub struct CountingClock {
    today: NaiveDate,
    calls: AtomicUsize,
}

impl CountingClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Clock for CountingClock {
    fn today(&self) -> NaiveDate {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.today
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub rule: Option<String>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            rule: visitor.rule,
        });
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    rule: Option<String>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "rule" {
            self.rule = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// Run `f` with a thread-local subscriber and return every event it logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    (result, captured)
}

/// Info events announcing a rule.
pub fn rule_announcements(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|event| event.level == Level::INFO && event.message.starts_with("Validating rule"))
        .collect()
}
