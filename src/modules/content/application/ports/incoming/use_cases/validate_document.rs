use serde::Serialize;
use serde_json::Value;

use crate::modules::content::domain::documents::DocumentType;
use crate::modules::content::domain::schema::ValidationIssue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub doc_type: DocumentType,
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
    /// Editor hint only; hidden fields do not affect `valid`.
    pub visible_fields: Vec<&'static str>,
}

pub trait ValidateDocumentUseCase: Send + Sync {
    fn execute(&self, doc_type: DocumentType, doc: &Value) -> ValidationReport;
}
