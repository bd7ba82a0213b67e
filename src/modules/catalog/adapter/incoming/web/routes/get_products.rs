use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::catalog::application::ports::incoming::use_cases::BrowseProductsError;
use crate::modules::catalog::domain::ProductFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "catalog",
    params(ProductFilter),
    responses(
        (
            status = 200,
            description = "Products matching the filter",
            example = json!({
                "success": true,
                "data": {
                    "products": [{
                        "_id": "product-undr",
                        "name": "Undr",
                        "slug": { "current": "undr" },
                        "tagline": "Underwriting copilot for small lenders",
                        "description": "Reads statements, drafts credit memos and flags follow-up questions.",
                        "category": "AI",
                        "status": "Beta",
                        "tags": ["fintech", "lending"]
                    }],
                    "categories": ["Productivity", "AI", "Travel", "Health", "Finance"],
                    "total": 1
                }
            })
        ),
        (status = 500, description = "Content store failure", body = ErrorResponse)
    )
)]
#[get("/api/products")]
pub async fn get_products_handler(
    query: web::Query<ProductFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.into_inner();

    match data.catalog.browse.execute(&filter).await {
        Ok(listing) => ApiResponse::success(listing),
        Err(BrowseProductsError::QueryFailed(msg)) => {
            error!("Failed to list products with {:?}: {}", filter, msg);
            ApiResponse::internal_error()
        }
    }
}
