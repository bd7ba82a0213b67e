// src/modules/content/domain/schema/editor_hints.rs
//
// Editor-only visibility hints. These never make a document invalid: a hidden field that is
// present is still accepted by `DocumentSchema::validate`.

use serde_json::Value;

use crate::modules::content::domain::documents::DocumentType;
use crate::modules::content::domain::schema::definitions::schema_for;

#[derive(Debug, Clone, PartialEq)]
pub enum HiddenWhen {
    FieldEquals {
        field: &'static str,
        value: &'static str,
    },
    FieldIn {
        field: &'static str,
        values: &'static [&'static str],
    },
    FieldNotIn {
        field: &'static str,
        values: &'static [&'static str],
    },
}

impl HiddenWhen {
    pub fn is_hidden(&self, doc: &Value) -> bool {
        let read = |field: &str| doc.get(field).and_then(Value::as_str);

        match self {
            HiddenWhen::FieldEquals { field, value } => read(field) == Some(*value),
            HiddenWhen::FieldIn { field, values } => {
                read(field).is_some_and(|v| values.contains(&v))
            }
            HiddenWhen::FieldNotIn { field, values } => {
                !read(field).is_some_and(|v| values.contains(&v))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldVisibility {
    pub field: &'static str,
    pub hidden_when: HiddenWhen,
}

pub fn editor_hints(doc_type: DocumentType) -> Vec<FieldVisibility> {
    match doc_type {
        DocumentType::Event => vec![
            FieldVisibility {
                field: "location",
                hidden_when: HiddenWhen::FieldEquals {
                    field: "format",
                    value: "online",
                },
            },
            FieldVisibility {
                field: "onlineUrl",
                hidden_when: HiddenWhen::FieldEquals {
                    field: "format",
                    value: "in-person",
                },
            },
            FieldVisibility {
                field: "registrationUrl",
                hidden_when: HiddenWhen::FieldIn {
                    field: "status",
                    values: &["past", "canceled"],
                },
            },
            FieldVisibility {
                field: "recordingUrl",
                hidden_when: HiddenWhen::FieldNotIn {
                    field: "status",
                    values: &["past"],
                },
            },
            FieldVisibility {
                field: "cancellationReason",
                hidden_when: HiddenWhen::FieldNotIn {
                    field: "status",
                    values: &["canceled", "postponed"],
                },
            },
        ],
        _ => Vec::new(),
    }
}

/// Top-level fields an editor should see for the current state of `doc`, in schema order.
pub fn visible_fields(doc_type: DocumentType, doc: &Value) -> Vec<&'static str> {
    let hints = editor_hints(doc_type);

    schema_for(doc_type)
        .fields
        .iter()
        .map(|f| f.name)
        .filter(|name| {
            !hints
                .iter()
                .any(|h| h.field == *name && h.hidden_when.is_hidden(doc))
        })
        .collect()
}
