use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::lead_intake::domain::{IntakeData, Step};
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct StepValidationResponse {
    #[schema(example = 1)]
    pub step: u8,
    #[schema(example = true)]
    pub valid: bool,
}

#[utoipa::path(
    post,
    path = "/api/start-project/steps/{step}/validate",
    tag = "lead-intake",
    params(
        ("step" = u8, Path, description = "Step index, 0 (welcome) to 5 (goals)")
    ),
    request_body = IntakeData,
    responses(
        (status = 200, description = "Whether the step's data is complete", body = inline(SuccessResponse<StepValidationResponse>)),
        (status = 400, description = "Step out of range or malformed body", body = ErrorResponse)
    )
)]
#[post("/api/start-project/steps/{step}/validate")]
pub async fn validate_step_handler(
    path: web::Path<u8>,
    body: web::Json<IntakeData>,
) -> impl Responder {
    let index = path.into_inner();

    let Some(step) = Step::from_index(index) else {
        return ApiResponse::bad_request("UNKNOWN_STEP", "Step must be between 0 and 5");
    };

    ApiResponse::success(StepValidationResponse {
        step: step.index(),
        valid: body.is_step_valid(step),
    })
}
