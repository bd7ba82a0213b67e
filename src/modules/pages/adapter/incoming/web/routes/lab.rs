use actix_web::{get, web, Responder};
use tracing::error;

use super::{list_for_page, not_found_page, page, resolve_for_page, Listing};
use crate::modules::catalog::application::ports::incoming::use_cases::{
    BrowseProductsError, ProductListing,
};
use crate::modules::catalog::domain::ProductFilter;
use crate::modules::content::domain::documents::{Document, DocumentType, Project};
use crate::modules::pages::adapter::incoming::web::views::lab::{lab_page, LAB_HREF};
use crate::modules::pages::adapter::incoming::web::views::project::{project_page, ProjectLinks};
use crate::AppState;

const LAB: Listing = Listing {
    href: LAB_HREF,
    label: "Back to Savvy Lab",
    not_found_title: "Project not found",
    not_found_message: "We couldn't find that lab project. It may have been renamed or removed.",
};

#[get("/savvy-lab")]
pub async fn lab_page_handler(
    query: web::Query<ProductFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.into_inner();

    let projects: Vec<Project> = list_for_page(&data, DocumentType::LabProject)
        .await
        .into_iter()
        .filter_map(Document::into_project)
        .collect();

    let listing = match data.catalog.browse.execute(&filter).await {
        Ok(listing) => listing,
        Err(BrowseProductsError::QueryFailed(msg)) => {
            error!("Failed to load products for the lab page: {}", msg);
            ProductListing {
                products: Vec::new(),
                categories: Vec::new(),
                total: 0,
            }
        }
    };

    page(lab_page(&data.chrome, &projects, &listing, &filter))
}

#[get("/savvy-lab/{slug}")]
pub async fn lab_project_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match resolve_for_page(&data, DocumentType::LabProject, &slug)
        .await
        .and_then(Document::into_project)
    {
        Some(project) => {
            let links = ProjectLinks {
                listing_href: LAB.href,
                listing_label: LAB.label,
                case_study_href: None,
            };
            page(project_page(&data.chrome, &project, &links))
        }
        None => not_found_page(&data.chrome, &LAB),
    }
}
