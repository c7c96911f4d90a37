//! Observability: runtime index metrics and the sink abstraction.
//!
//! Counters are thread-local; a probe running on a worker thread reports
//! into that thread's state.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{IndexCounters, KindCounters, KindSummary, MetricsReport, MetricsState};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
