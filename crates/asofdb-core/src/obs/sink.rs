//! Metrics sink boundary.
//!
//! Index code never touches `obs::metrics` directly; every counter update
//! flows through `MetricsEvent` and `MetricsSink`.

use crate::{
    index::{Inequality, IndexOperation, OrderingKind},
    obs::metrics::{self, MetricsReport},
    types::ColumnType,
};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    IndexCreated {
        kind: OrderingKind,
        inequality: Inequality,
    },
    UnsupportedType {
        column_type: ColumnType,
    },
    Finalized {
        kind: OrderingKind,
        entries: u64,
        skipped: u64,
    },
    Lookup {
        kind: OrderingKind,
        matched: bool,
    },
    PhaseViolation {
        operation: IndexOperation,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink writing into the thread-local metrics state.
/// Used whenever no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::IndexCreated { kind, .. } => {
                metrics::with_state_mut(|m| {
                    m.index.indexes_created = m.index.indexes_created.saturating_add(1);
                    let entry = m.kinds.entry(kind).or_default();
                    entry.indexes_created = entry.indexes_created.saturating_add(1);
                });
            }

            MetricsEvent::UnsupportedType { .. } => {
                metrics::with_state_mut(|m| {
                    m.index.unsupported_types = m.index.unsupported_types.saturating_add(1);
                });
            }

            MetricsEvent::Finalized {
                kind,
                entries,
                skipped,
            } => {
                metrics::with_state_mut(|m| {
                    m.index.indexes_finalized = m.index.indexes_finalized.saturating_add(1);
                    m.index.entries_indexed = m.index.entries_indexed.saturating_add(entries);
                    m.index.entries_skipped = m.index.entries_skipped.saturating_add(skipped);
                    let entry = m.kinds.entry(kind).or_default();
                    entry.entries_indexed = entry.entries_indexed.saturating_add(entries);
                });
            }

            MetricsEvent::Lookup { kind, matched } => {
                let hit = u64::from(matched);
                metrics::with_state_mut(|m| {
                    m.index.lookups = m.index.lookups.saturating_add(1);
                    m.index.lookup_hits = m.index.lookup_hits.saturating_add(hit);
                    let entry = m.kinds.entry(kind).or_default();
                    entry.lookups = entry.lookups.saturating_add(1);
                    entry.lookup_hits = entry.lookup_hits.saturating_add(hit);
                });
            }

            MetricsEvent::PhaseViolation { .. } => {
                metrics::with_state_mut(|m| {
                    m.index.phase_violations = m.index.phase_violations.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    // Clone out of the slot so a sink may itself install overrides.
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's metrics.
#[must_use]
pub fn metrics_report() -> MetricsReport {
    metrics::report()
}

/// Reset all metrics state on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with `sink` receiving every event recorded on this thread.
/// The previous sink is restored on exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::Cell,
        panic::{AssertUnwindSafe, catch_unwind},
    };

    #[derive(Default)]
    struct CountingSink {
        calls: Cell<usize>,
    }

    impl MetricsSink for CountingSink {
        fn record(&self, _: MetricsEvent) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    const EVENT: MetricsEvent = MetricsEvent::PhaseViolation {
        operation: IndexOperation::Lookup,
    };

    #[test]
    fn with_metrics_sink_routes_and_restores_nested_overrides() {
        metrics_reset_all();
        let outer = Rc::new(CountingSink::default());
        let inner = Rc::new(CountingSink::default());

        with_metrics_sink(outer.clone(), || {
            record(EVENT);
            with_metrics_sink(inner.clone(), || record(EVENT));
            record(EVENT);
        });
        record(EVENT);

        assert_eq!(outer.calls.get(), 2);
        assert_eq!(inner.calls.get(), 1);
        assert_eq!(metrics_report().counters.phase_violations, 1);
    }

    #[test]
    fn with_metrics_sink_restores_after_panic() {
        metrics_reset_all();
        let sink = Rc::new(CountingSink::default());

        let result = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink::<()>(sink.clone(), || panic!("boom"));
        }));
        assert!(result.is_err());

        record(EVENT);
        assert_eq!(sink.calls.get(), 0);
        assert_eq!(metrics_report().counters.phase_violations, 1);
    }

    #[test]
    fn global_sink_tracks_hits_per_kind() {
        metrics_reset_all();
        for matched in [true, false, true] {
            record(MetricsEvent::Lookup {
                kind: OrderingKind::Int64,
                matched,
            });
        }

        let report = metrics_report();
        assert_eq!(report.counters.lookups, 3);
        assert_eq!(report.counters.lookup_hits, 2);

        let int64 = report
            .kinds
            .iter()
            .find(|k| k.kind == "Int64")
            .expect("int64 summary");
        assert!((int64.hit_ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn kind_counters_are_keyed_by_kind_and_labelled_on_report() {
        metrics_reset_all();
        record(MetricsEvent::Lookup {
            kind: OrderingKind::UInt8,
            matched: false,
        });
        record(MetricsEvent::Finalized {
            kind: OrderingKind::Float64,
            entries: 4,
            skipped: 1,
        });

        metrics::with_state(|m| {
            assert_eq!(m.kinds.len(), 2);
            assert_eq!(m.kinds[&OrderingKind::UInt8].lookups, 1);
            assert_eq!(m.kinds[&OrderingKind::Float64].entries_indexed, 4);
        });

        let report = metrics_report();
        let float = report
            .kinds
            .iter()
            .find(|k| k.kind == "Float64")
            .expect("float64 summary");
        assert_eq!(float.entries_indexed, 4);
        assert_eq!(report.counters.entries_skipped, 1);
    }
}
