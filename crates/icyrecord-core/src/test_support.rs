//! Shared fixtures for unit tests.

use crate::{
    model::{FieldDescriptor, RecordType},
    obs::sink::{RecordEvent, RecordSink},
    value::{Kind, Value},
};
use std::cell::RefCell;

///
/// CollectingSink
/// Captures events as short strings for assertions.
///

#[derive(Default)]
pub(crate) struct CollectingSink {
    events: RefCell<Vec<String>>,
}

impl CollectingSink {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl RecordSink for CollectingSink {
    fn record(&self, event: RecordEvent<'_>) {
        let line = match event {
            RecordEvent::TypeDefined { record, fields, .. } => {
                format!("defined {record} ({fields})")
            }
            RecordEvent::Constructed { record, fields } => {
                format!("constructed {record} ({fields})")
            }
            RecordEvent::Rejected { record, class, .. } => format!("rejected {record} {class}"),
            RecordEvent::WriteRejected { record, field } => {
                format!("write rejected {record}.{field}")
            }
        };

        self.events.borrow_mut().push(line);
    }
}

/// `Person { name: Text, age: Int >= 0 }`, both labelled.
pub(crate) fn person() -> RecordType {
    RecordType::builder("Person")
        .field_with("name", Kind::Text, FieldDescriptor::new("Full name"))
        .field_with(
            "age",
            Kind::Int,
            FieldDescriptor::new("Age in years")
                .with_precondition(|v| v.as_int().is_some_and(|age| age >= 0)),
        )
        .build()
        .expect("person fixture builds")
}

/// `Employee extends Person { company: Text }`.
pub(crate) fn employee(person: &RecordType) -> RecordType {
    RecordType::builder("Employee")
        .extends(person)
        .field("company", Kind::Text)
        .build()
        .expect("employee fixture builds")
}

pub(crate) fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}
