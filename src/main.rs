pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::services::BrowseProductsService;
use crate::modules::content::adapter::outgoing::static_data::site_settings;
use crate::modules::content::adapter::outgoing::{
    CompositeContentProvider, SanityContentProvider, StaticContentProvider,
};
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::outgoing::ContentProvider;
use crate::modules::content::application::services::{
    ListDocumentsService, ResolveDocumentService, ValidateDocumentService,
};
use crate::modules::content::domain::documents::{Document, DocumentType, ImageRef};
use crate::modules::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use crate::modules::lead_intake::adapter::outgoing::{EmailLeadNotifier, TracingLeadNotifier};
use crate::modules::lead_intake::application::lead_intake_use_cases::LeadIntakeUseCases;
use crate::modules::lead_intake::application::ports::incoming::use_cases::SubmitLeadUseCase;
use crate::modules::lead_intake::application::services::SubmitLeadService;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{ContentSource, LeadEmailConfig, SiteConfig, SmtpSettings};
use crate::shared::html::SiteChrome;

use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

/// Document types that only ever live in the bundled data.
const BUNDLED_ONLY: [DocumentType; 2] = [DocumentType::LabProject, DocumentType::Product];

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub catalog: CatalogUseCases,
    pub lead_intake: LeadIntakeUseCases,
    pub chrome: SiteChrome,
    pub content_provider: Arc<dyn ContentProvider>,
}

#[cfg(not(tarpaulin_include))]
fn content_provider_from(config: &SiteConfig) -> io::Result<Arc<dyn ContentProvider>> {
    let bundled: Arc<dyn ContentProvider> = Arc::new(StaticContentProvider::bundled());

    match (config.content_source, &config.sanity) {
        (ContentSource::Sanity, Some(sanity)) => {
            let remote = SanityContentProvider::new(sanity.clone())
                .map_err(|e| io::Error::other(e.to_string()))?;
            info!(
                "Content from store {} (dataset {}), lab projects and products bundled",
                sanity.project_id, sanity.dataset
            );

            Ok(Arc::new(
                CompositeContentProvider::new(Arc::new(remote)).route_all(&BUNDLED_ONLY, bundled),
            ))
        }
        _ => {
            info!("Serving bundled content only");
            Ok(bundled)
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn email_sender_from(lead: &LeadEmailConfig) -> io::Result<SmtpEmailSender> {
    match &lead.smtp {
        SmtpSettings::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &lead.from_email)
            .map_err(io::Error::other),
        SmtpSettings::Local { host, port } => {
            Ok(SmtpEmailSender::new_local(host, *port, &lead.from_email))
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn submit_lead_from(config: &SiteConfig) -> io::Result<Arc<dyn SubmitLeadUseCase + Send + Sync>> {
    match &config.lead_email {
        Some(lead) => {
            let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(email_sender_from(lead)?);
            info!("Enquiries are emailed to {}", lead.inbox);
            Ok(Arc::new(SubmitLeadService::new(EmailLeadNotifier::new(
                sender,
                &lead.inbox,
            ))))
        }
        None => {
            warn!("LEAD_NOTIFY_EMAIL not set, enquiries are only logged");
            Ok(Arc::new(SubmitLeadService::new(TracingLeadNotifier)))
        }
    }
}

/// Header chrome from the site settings document, falling back to the bundled one.
#[cfg(not(tarpaulin_include))]
async fn site_chrome_from(provider: &Arc<dyn ContentProvider>, config: &SiteConfig) -> SiteChrome {
    let settings = match provider.list(DocumentType::SiteSettings).await {
        Ok(docs) => docs.into_iter().find_map(|d| match d {
            Document::SiteSettings(s) => Some(s),
            _ => None,
        }),
        Err(e) => {
            warn!("Could not load site settings, using bundled defaults: {}", e);
            None
        }
    };

    let chrome = SiteChrome::from_settings(&settings.unwrap_or_else(site_settings));

    match &config.site_logo {
        Some(url) => chrome.with_logo(Some(&ImageRef::from_url(url, &chrome.site_title))),
        None => chrome,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = SiteConfig::from_env().map_err(|e| io::Error::other(e.to_string()))?;

    let content_provider = content_provider_from(&config)?;
    let chrome = site_chrome_from(&content_provider, &config).await;

    let state = AppState {
        content: ContentUseCases {
            resolve: Arc::new(ResolveDocumentService::new(Arc::clone(&content_provider))),
            list: Arc::new(ListDocumentsService::new(Arc::clone(&content_provider))),
            validate: Arc::new(ValidateDocumentService),
        },
        catalog: CatalogUseCases {
            browse: Arc::new(BrowseProductsService::new(Arc::clone(&content_provider))),
        },
        lead_intake: LeadIntakeUseCases {
            submit: submit_lead_from(&config)?,
        },
        chrome,
        content_provider,
    };

    let (host, port) = config.bind_address();
    info!("Server run on: {}:{} ({})", host, port, config.rust_env);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind((host, port))?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // Static assets
    cfg.service(crate::shared::html::assets::site_css);
    cfg.service(crate::shared::html::assets::motion_js);
    cfg.service(crate::shared::html::assets::savvy_logo);

    // JSON API
    cfg.service(crate::modules::content::adapter::incoming::web::routes::validate_document_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_document_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::list_documents_handler);
    cfg.service(crate::modules::catalog::adapter::incoming::web::routes::get_products_handler);
    cfg.service(crate::modules::lead_intake::adapter::incoming::web::routes::validate_step_handler);
    cfg.service(crate::modules::lead_intake::adapter::incoming::web::routes::submit_lead_handler);

    // Pages
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::hub_page_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::podcast_page_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::impact_page_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::case_study_page_handler);
    cfg.service(
        crate::modules::pages::adapter::incoming::web::routes::impact_project_page_handler,
    );
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::lab_page_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::lab_project_page_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::start_project_page_handler);
    cfg.service(
        crate::modules::pages::adapter::incoming::web::routes::start_project_action_handler,
    );

    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
