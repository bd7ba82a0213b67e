use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::lead_intake::application::ports::incoming::use_cases::{
    LeadReceipt, SubmitLeadError,
};
use crate::modules::lead_intake::domain::IntakeData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/start-project/submit",
    tag = "lead-intake",
    request_body = IntakeData,
    responses(
        (
            status = 202,
            description = "Lead accepted and forwarded to the studio",
            body = inline(SuccessResponse<LeadReceipt>),
            example = json!({
                "success": true,
                "data": {
                    "reference": "0b9e3c9e-3f5c-4a4e-9a57-2f1c0f4f8a11",
                    "received_at": "2025-02-03T10:30:00Z"
                }
            })
        ),
        (
            status = 400,
            description = "A step is incomplete",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_STEP", "message": "step 1 (About you) is incomplete" }
            })
        ),
        (status = 500, description = "Lead could not be delivered", body = ErrorResponse)
    )
)]
#[post("/api/start-project/submit")]
pub async fn submit_lead_handler(
    body: web::Json<IntakeData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.lead_intake.submit.execute(body.into_inner()).await {
        Ok(receipt) => ApiResponse::accepted(receipt),

        Err(e @ SubmitLeadError::InvalidStep(_)) => {
            ApiResponse::bad_request("INVALID_STEP", &e.to_string())
        }

        Err(SubmitLeadError::NotificationFailed(msg)) => {
            error!("Lead submission failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
