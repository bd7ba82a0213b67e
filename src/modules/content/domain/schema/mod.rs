mod definitions;
mod editor_hints;
mod rules;

pub use definitions::schema_for;
pub use editor_hints::{editor_hints, visible_fields, FieldVisibility, HiddenWhen};
pub use rules::{DocumentSchema, FieldDef, FieldKind, Rule, ValidationIssue};
