use crate::index::OrderingKind;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// MetricsState
/// Ephemeral, in-memory counters for as-of index activity on this thread.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsState {
    pub index: IndexCounters,
    pub kinds: BTreeMap<OrderingKind, KindCounters>,
}

///
/// IndexCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndexCounters {
    // Construction
    pub indexes_created: u64,
    pub unsupported_types: u64,

    // Build side
    pub indexes_finalized: u64,
    pub entries_indexed: u64,
    pub entries_skipped: u64,

    // Probe side
    pub lookups: u64,
    pub lookup_hits: u64,

    // Misuse
    pub phase_violations: u64,
}

///
/// KindCounters
/// Per ordering kind. Labels are rendered only when reporting.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct KindCounters {
    pub indexes_created: u64,
    pub entries_indexed: u64,
    pub lookups: u64,
    pub lookup_hits: u64,
}

thread_local! {
    static METRICS_STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&MetricsState) -> R) -> R {
    METRICS_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsState) -> R) -> R {
    METRICS_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = MetricsState::default());
}

///
/// MetricsReport
/// Point-in-time copy of the counters plus derived ratios.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MetricsReport {
    pub counters: IndexCounters,
    pub kinds: Vec<KindSummary>,
}

///
/// KindSummary
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KindSummary {
    pub kind: String,
    pub indexes_created: u64,
    pub entries_indexed: u64,
    pub lookups: u64,
    pub lookup_hits: u64,
    pub hit_ratio: f64,
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Build a report from the current thread's state.
pub(crate) fn report() -> MetricsReport {
    with_state(|m| MetricsReport {
        counters: m.index.clone(),
        kinds: m
            .kinds
            .iter()
            .map(|(kind, c)| KindSummary {
                kind: kind.to_string(),
                indexes_created: c.indexes_created,
                entries_indexed: c.entries_indexed,
                lookups: c.lookups,
                lookup_hits: c.lookup_hits,
                hit_ratio: ratio(c.lookup_hits, c.lookups),
            })
            .collect(),
    })
}
