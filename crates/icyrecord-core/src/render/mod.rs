//! Two-step rendering.
//!
//! A record type renders to a `Template`: one line per field, labelled with
//! the field's descriptor, holding a named placeholder keyed by the field's
//! storage slot. A record instance renders by filling its type's template
//! with the stored values. Text fields keep their placeholder inside single
//! quotes; every other kind is substituted bare.


use crate::{
    model::{RecordType, storage_key},
    record::Record,
};
use std::fmt::{self, Write as _};

///
/// Segment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    Literal(String),
    /// Substituted with the value stored for `field`.
    Placeholder { field: String },
}

///
/// Template
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Storage keys of every placeholder, in template order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<String> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder { field } => Some(storage_key(field)),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    ///
    /// fill
    ///
    /// Substitute every placeholder with the record's stored value.
    /// A field without a value keeps its placeholder text.
    ///
    #[must_use]
    pub fn fill(&self, record: &Record) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { field } => match record.get(field) {
                    Ok(value) => {
                        let _ = write!(out, "{value}");
                    }
                    Err(_) => {
                        let _ = write!(out, "{{{}}}", storage_key(field));
                    }
                },
            }
        }

        out
    }

    fn push_literal(&mut self, text: &str) {
        if let Some(Segment::Literal(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Literal(text.to_string()));
        }
    }

    fn push_placeholder(&mut self, field: &str) {
        self.segments.push(Segment::Placeholder {
            field: field.to_string(),
        });
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder { field } => write!(f, "{{{}}}", storage_key(field))?,
            }
        }

        Ok(())
    }
}

impl RecordType {
    /// Build the type-level template, inherited fields included.
    #[must_use]
    pub fn template(&self) -> Template {
        let mut template = Template::default();
        template.push_literal(&format!("{}(\n", self.name()));

        for field in self.resolve_fields() {
            if let Some(label) = field.label() {
                template.push_literal(&format!("  # {label}\n"));
            }

            if field.is_text() {
                template.push_literal(&format!("  {}='", field.name));
                template.push_placeholder(field.name);
                template.push_literal("'\n");
            } else {
                template.push_literal(&format!("  {}=", field.name));
                template.push_placeholder(field.name);
                template.push_literal("\n");
            }
        }
        template.push_literal(")");

        template
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.record_type().template().fill(self))
    }
}
