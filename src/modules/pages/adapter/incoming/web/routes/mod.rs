mod hub;
mod impact;
mod lab;
mod start_project;

pub use hub::{hub_page_handler, podcast_page_handler};
pub use impact::{case_study_page_handler, impact_page_handler, impact_project_page_handler};
pub use lab::{lab_page_handler, lab_project_page_handler};
pub use start_project::{start_project_action_handler, start_project_page_handler};

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use maud::Markup;
use tracing::{debug, error};

use crate::modules::content::application::ports::incoming::use_cases::{
    ListDocumentsError, ResolveDocumentError,
};
use crate::modules::content::domain::documents::{Document, DocumentType};
use crate::shared::html::{html_response, not_found_view, SiteChrome};
use crate::AppState;

/// The listing a detail page falls back to.
pub(crate) struct Listing {
    pub href: &'static str,
    pub label: &'static str,
    pub not_found_title: &'static str,
    pub not_found_message: &'static str,
}

pub(crate) fn page(markup: Markup) -> HttpResponse {
    html_response(StatusCode::OK, markup)
}

pub(crate) fn not_found_page(chrome: &SiteChrome, listing: &Listing) -> HttpResponse {
    html_response(
        StatusCode::NOT_FOUND,
        not_found_view(
            chrome,
            listing.not_found_title,
            listing.not_found_message,
            listing.href,
            listing.label,
        ),
    )
}

/// `None` for both a missing document and a failed fetch; pages render the same
/// fallback either way. Fetch failures are logged.
pub(crate) async fn resolve_for_page(
    data: &AppState,
    doc_type: DocumentType,
    slug: &str,
) -> Option<Document> {
    match data.content.resolve.execute(doc_type, slug).await {
        Ok(document) => Some(document),

        Err(ResolveDocumentError::NotFound) => {
            debug!("No {} with slug {:?}", doc_type, slug);
            None
        }

        Err(ResolveDocumentError::Upstream(msg)) => {
            error!("Failed to resolve {} slug={:?}: {}", doc_type, slug, msg);
            None
        }
    }
}

/// Listing pages degrade to an empty list when the content store fails.
pub(crate) async fn list_for_page(data: &AppState, doc_type: DocumentType) -> Vec<Document> {
    match data.content.list.execute(doc_type).await {
        Ok(documents) => documents,
        Err(ListDocumentsError::QueryFailed(msg)) => {
            error!("Failed to list {}: {}", doc_type, msg);
            Vec::new()
        }
    }
}
