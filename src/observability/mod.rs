//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and repositories emit:
//!     → logging.rs (structured tracing events, pretty or JSON)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Request spans come from tower-http's TraceLayer and carry the
//! x-request-id assigned in http/request.rs.
//! ```

pub mod logging;
pub mod metrics;
