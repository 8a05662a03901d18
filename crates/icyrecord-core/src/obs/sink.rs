//! Record event sink.
//!
//! This module is the only bridge between record logic and logging.
//! Sinks observe; they never change the outcome of the operation that
//! emitted the event.
use crate::error::ErrorClass;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn RecordSink>> = const { RefCell::new(None) };
}

///
/// RecordEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordEvent<'a> {
    TypeDefined {
        record: &'a str,
        parent: Option<&'a str>,
        fields: usize,
    },
    Constructed {
        record: &'a str,
        fields: usize,
    },
    Rejected {
        record: &'a str,
        class: ErrorClass,
        field: Option<&'a str>,
    },
    WriteRejected {
        record: &'a str,
        field: &'a str,
    },
}

///
/// RecordSink
///

pub trait RecordSink {
    fn record(&self, event: RecordEvent<'_>);
}

/// TracingSink
/// Default sink; forwards events to the `tracing` facade.
/// Installing a subscriber is left to the application.

pub(crate) struct TracingSink;

impl RecordSink for TracingSink {
    fn record(&self, event: RecordEvent<'_>) {
        match event {
            RecordEvent::TypeDefined {
                record,
                parent,
                fields,
            } => {
                tracing::debug!(record, parent, fields, "record type defined");
            }
            RecordEvent::Constructed { record, fields } => {
                tracing::trace!(record, fields, "record constructed");
            }
            RecordEvent::Rejected {
                record,
                class,
                field,
            } => {
                tracing::debug!(record, %class, field, "record construction rejected");
            }
            RecordEvent::WriteRejected { record, field } => {
                tracing::debug!(record, field, "write to read-only attribute rejected");
            }
        }
    }
}

pub(crate) const TRACING_SINK: TracingSink = TracingSink;

pub(crate) fn record(event: RecordEvent<'_>) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn RecordSink` in `with_record_sink`.
        // - `with_record_sink` restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        unsafe { (&*ptr).record(event) };
    } else {
        TRACING_SINK.record(event);
    }
}

/// Run a closure with a temporary sink override on the current thread.
pub fn with_record_sink<T>(sink: &dyn RecordSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn RecordSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn RecordSink, *const dyn RecordSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
