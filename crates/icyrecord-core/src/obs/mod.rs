//! Observability boundary.
//!
//! Record logic never logs directly. Every event flows through
//! `sink::record`, which forwards to a scoped override if one is installed
//! and to the `tracing` facade otherwise.

pub mod sink;

pub use sink::{RecordEvent, RecordSink, with_record_sink};
