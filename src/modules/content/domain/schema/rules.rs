// src/modules/content/domain/schema/rules.rs

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::modules::content::domain::documents::DocumentType;

//
// ──────────────────────────────────────────────────────────
// Field model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Text,
    Number,
    Boolean,
    Slug,
    Url,
    DateTime,
    Image,
    Reference { to: &'static [&'static str] },
    Array(Box<FieldKind>),
    Object(Vec<FieldDef>),
    /// Rich-text blocks
    Block,
    Enum(&'static [&'static str]),
}

/// Length rules count chars on strings and items on arrays; on numbers they bound the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    Min(i64),
    Max(i64),
    Email,
    Uri,
    Pattern(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<Rule>,
}

impl FieldDef {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            rules: Vec::new(),
        }
    }

    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    pub fn min(self, n: i64) -> Self {
        self.rule(Rule::Min(n))
    }

    pub fn max(self, n: i64) -> Self {
        self.rule(Rule::Max(n))
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSchema {
    pub doc_type: DocumentType,
    pub title: &'static str,
    pub fields: Vec<FieldDef>,
}

impl DocumentSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks a wire document against the declared fields. An empty result means valid.
    pub fn validate(&self, doc: &Value) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        match doc.as_object() {
            Some(obj) => validate_fields(&self.fields, obj, "", &mut issues),
            None => issues.push(ValidationIssue::new("", "Document must be a JSON object")),
        }

        issues
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn uri_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(https?://|mailto:|/)\S+$").expect("valid uri regex"))
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn validate_fields(
    fields: &[FieldDef],
    obj: &Map<String, Value>,
    prefix: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for field in fields {
        let path = join_path(prefix, field.name);

        match obj.get(field.name).filter(|v| !is_blank(v)) {
            None => {
                if field.is_required() {
                    issues.push(ValidationIssue::new(&path, "Required"));
                }
            }
            Some(value) => {
                if check_kind(&field.kind, value, &path, issues) {
                    check_rules(&field.rules, value, &path, issues);
                }
            }
        }
    }
}

/// Returns false when the value has the wrong shape, so rule checks are skipped.
fn check_kind(kind: &FieldKind, value: &Value, path: &str, issues: &mut Vec<ValidationIssue>) -> bool {
    let shape_ok = match kind {
        FieldKind::String | FieldKind::Text => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Slug => value
            .get("current")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty()),
        FieldKind::Url => value.as_str().is_some_and(|s| uri_regex().is_match(s)),
        FieldKind::DateTime => value
            .as_str()
            .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()),
        FieldKind::Image => {
            let has_asset = value
                .get("asset")
                .and_then(|a| a.get("_ref"))
                .is_some_and(Value::is_string);
            let has_url = value.get("url").is_some_and(Value::is_string);
            value.is_object() && (has_asset || has_url)
        }
        FieldKind::Reference { .. } => value.get("_ref").is_some_and(Value::is_string),
        FieldKind::Enum(options) => value.as_str().is_some_and(|s| options.contains(&s)),
        FieldKind::Block => value.as_array().is_some_and(|blocks| {
            blocks
                .iter()
                .all(|b| b.get("_type").is_some_and(Value::is_string))
        }),
        FieldKind::Array(inner) => {
            let Some(items) = value.as_array() else {
                issues.push(ValidationIssue::new(path, "Expected an array"));
                return false;
            };
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                if item.is_null() {
                    issues.push(ValidationIssue::new(&item_path, "Array items cannot be null"));
                    continue;
                }
                check_kind(inner, item, &item_path, issues);
            }
            return true;
        }
        FieldKind::Object(fields) => {
            let Some(obj) = value.as_object() else {
                issues.push(ValidationIssue::new(path, "Expected an object"));
                return false;
            };
            validate_fields(fields, obj, path, issues);
            return true;
        }
    };

    if !shape_ok {
        issues.push(ValidationIssue::new(path, expected_message(kind)));
    }
    shape_ok
}

fn expected_message(kind: &FieldKind) -> String {
    match kind {
        FieldKind::String | FieldKind::Text => "Expected a string".to_string(),
        FieldKind::Number => "Expected a number".to_string(),
        FieldKind::Boolean => "Expected a boolean".to_string(),
        FieldKind::Slug => "Expected a slug with a non-empty `current`".to_string(),
        FieldKind::Url => "Expected an absolute URL, mailto link or site path".to_string(),
        FieldKind::DateTime => "Expected an RFC 3339 date-time".to_string(),
        FieldKind::Image => "Expected an image with an asset reference or url".to_string(),
        FieldKind::Reference { to } => format!("Expected a reference to one of: {}", to.join(", ")),
        FieldKind::Enum(options) => format!("Must be one of: {}", options.join(", ")),
        FieldKind::Block => "Expected rich-text blocks".to_string(),
        FieldKind::Array(_) => "Expected an array".to_string(),
        FieldKind::Object(_) => "Expected an object".to_string(),
    }
}

fn measure(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => Some(s.chars().count() as i64),
        Value::Array(items) => Some(items.len() as i64),
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        _ => None,
    }
}

fn check_rules(rules: &[Rule], value: &Value, path: &str, issues: &mut Vec<ValidationIssue>) {
    for rule in rules {
        match rule {
            Rule::Required => {}
            Rule::Min(n) => {
                if measure(value).is_some_and(|m| m < *n) {
                    issues.push(ValidationIssue::new(path, format!("Must be at least {n}")));
                }
            }
            Rule::Max(n) => {
                if measure(value).is_some_and(|m| m > *n) {
                    issues.push(ValidationIssue::new(path, format!("Must be at most {n}")));
                }
            }
            Rule::Email => {
                if !value.as_str().is_some_and(|s| email_regex().is_match(s)) {
                    issues.push(ValidationIssue::new(path, "Must be a valid email address"));
                }
            }
            Rule::Uri => {
                if !value.as_str().is_some_and(|s| uri_regex().is_match(s)) {
                    issues.push(ValidationIssue::new(path, "Must be a valid URL"));
                }
            }
            Rule::Pattern(pattern) => {
                let matched = match (Regex::new(pattern), value.as_str()) {
                    (Ok(re), Some(s)) => re.is_match(s),
                    _ => false,
                };
                if !matched {
                    issues.push(ValidationIssue::new(
                        path,
                        format!("Does not match pattern {pattern}"),
                    ));
                }
            }
        }
    }
}
