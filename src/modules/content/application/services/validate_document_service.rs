use serde_json::Value;

use crate::modules::content::application::ports::incoming::use_cases::{
    ValidateDocumentUseCase, ValidationReport,
};
use crate::modules::content::domain::documents::DocumentType;
use crate::modules::content::domain::schema::{schema_for, visible_fields};

#[derive(Debug, Default, Clone)]
pub struct ValidateDocumentService;

impl ValidateDocumentUseCase for ValidateDocumentService {
    fn execute(&self, doc_type: DocumentType, doc: &Value) -> ValidationReport {
        let issues = schema_for(doc_type).validate(doc);

        ValidationReport {
            doc_type,
            valid: issues.is_empty(),
            issues,
            visible_fields: visible_fields(doc_type, doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_is_valid_when_no_issues() {
        let doc = json!({
            "name": "Stitch",
            "slug": { "current": "stitch" },
            "role": "Designer"
        });

        let report = ValidateDocumentService.execute(DocumentType::TeamMember, &doc);

        assert!(report.valid);
        assert!(report.issues.is_empty());
        assert!(report.visible_fields.contains(&"bio"));
    }

    #[test]
    fn report_lists_issues_and_hints_together() {
        let doc = json!({
            "title": "Launch party",
            "slug": { "current": "launch" },
            "eventType": "meetup",
            "status": "canceled",
            "format": "online"
        });

        let report = ValidateDocumentService.execute(DocumentType::Event, &doc);

        assert!(!report.valid);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].path, "dateTime");
        assert!(report.visible_fields.contains(&"cancellationReason"));
        assert!(!report.visible_fields.contains(&"location"));
    }
}
