use crate::api::schemas::{
    ErrorDetail, ErrorResponse, SuccessResponse, ValidationIssueSchema, ValidationReportSchema,
};
use utoipa::OpenApi;

use crate::modules::lead_intake::adapter::incoming::web::routes::StepValidationResponse;
use crate::modules::lead_intake::application::ports::incoming::use_cases::LeadReceipt;
use crate::modules::lead_intake::domain::IntakeData;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Savvy Site API",
        version = "1.0.0",
        description = "Content, product catalog and project enquiry endpoints behind the Savvy studio site",
        contact(
            name = "Savvy Studio",
            email = "hello@savvy.studio"
        )
    ),
    paths(
        // Content endpoints
        crate::modules::content::adapter::incoming::web::routes::get_document::get_document_handler,
        crate::modules::content::adapter::incoming::web::routes::list_documents::list_documents_handler,
        crate::modules::content::adapter::incoming::web::routes::validate_document::validate_document_handler,

        // Catalog endpoints
        crate::modules::catalog::adapter::incoming::web::routes::get_products::get_products_handler,

        // Lead intake endpoints
        crate::modules::lead_intake::adapter::incoming::web::routes::validate_step::validate_step_handler,
        crate::modules::lead_intake::adapter::incoming::web::routes::submit_lead::submit_lead_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LeadReceipt>,
            ErrorResponse,
            ErrorDetail,

            // Content DTOs
            ValidationReportSchema,
            ValidationIssueSchema,

            // Lead intake DTOs
            IntakeData,
            LeadReceipt,
            StepValidationResponse
        )
    ),
    tags(
        (name = "content", description = "Typed documents resolved by type and slug"),
        (name = "catalog", description = "Lab product grid with category, status and search filters"),
        (name = "lead-intake", description = "Start-project form step checks and submission"),
    )
)]
pub struct ApiDoc;
