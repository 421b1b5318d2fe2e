#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use entity_query::QueryBuilder;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Collects formatted events so tests can inspect them.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let guard = subscriber.set_default();
    f();
    drop(guard);

    logs.contents()
}

#[test]
fn accepted_filter_emits_trace_event() {
    let output = capture(|| {
        let mut qb = QueryBuilder::new("Entity e");
        qb.and_where("e.a = ?", [1]).unwrap();
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e WHERE (e.a = :param1)");
    });

    let line = output
        .lines()
        .find(|l| l.contains("accepted filter fragment"))
        .unwrap_or_else(|| panic!("no accepted event in {output:?}"));
    assert!(line.contains("TRACE"), "{line}");
    assert!(line.contains("entity_query.builder"), "{line}");
    assert!(line.contains("clause=\"AND\""), "{line}");
    assert!(line.contains("first_param=1"), "{line}");
    assert!(line.contains("param_count=1"), "{line}");
    assert!(line.contains("fragment=e.a = :param1"), "{line}");
}

#[test]
fn rejected_filter_emits_debug_event_with_counts() {
    let output = capture(|| {
        let mut qb = QueryBuilder::new("Entity e");
        assert!(qb.or_where("e.b = ?", [1, 2]).is_err());
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e");
    });

    let line = output
        .lines()
        .find(|l| l.contains("rejected filter fragment"))
        .unwrap_or_else(|| panic!("no rejected event in {output:?}"));
    assert!(line.contains("DEBUG"), "{line}");
    assert!(line.contains("entity_query.builder"), "{line}");
    assert!(line.contains("clause=\"OR\""), "{line}");
    assert!(line.contains("placeholders=1"), "{line}");
    assert!(line.contains("values=2"), "{line}");
    assert!(line.contains("fragment=e.b = ?"), "{line}");
    assert!(!output.contains("accepted filter fragment"));
}

#[test]
fn filter_events_are_below_info_level() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_writer(logs.clone())
        .finish();

    let guard = subscriber.set_default();
    let mut qb = QueryBuilder::new("Entity e");
    qb.and_where("e.a = ?", [1]).unwrap();
    let _ = qb.or_where("e.b = ?", [1, 2]);
    drop(guard);

    assert!(logs.contents().is_empty());
}
