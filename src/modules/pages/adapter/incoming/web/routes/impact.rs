use actix_web::{get, web, Responder};
use maud::html;

use super::{list_for_page, not_found_page, page, resolve_for_page, Listing};
use crate::modules::case_study::domain::project_to_case_study;
use crate::modules::content::domain::documents::{Document, DocumentType, Project};
use crate::modules::pages::adapter::incoming::web::views::case_study::case_study_page;
use crate::modules::pages::adapter::incoming::web::views::lab::project_card;
use crate::modules::pages::adapter::incoming::web::views::project::{project_page, ProjectLinks};
use crate::modules::pages::adapter::incoming::web::views::INTRO_MOTION;
use crate::shared::html::{base_document, motion_attr, motion_style};
use crate::AppState;

const IMPACT_HREF: &str = "/savvy-impact";

const IMPACT: Listing = Listing {
    href: IMPACT_HREF,
    label: "Back to Savvy Impact",
    not_found_title: "Project not found",
    not_found_message: "We couldn't find that project. It may have been renamed or removed.",
};

const CASE_STUDIES: Listing = Listing {
    not_found_title: "Case study not found",
    not_found_message: "We couldn't find that case study. It may have been renamed or removed.",
    ..IMPACT
};

fn project_href(slug: &str) -> String {
    format!("{}/project/{}", IMPACT_HREF, slug)
}

fn case_study_href(slug: &str) -> String {
    format!("{}/project/case-study/{}", IMPACT_HREF, slug)
}

async fn resolve_project(data: &AppState, slug: &str) -> Option<Project> {
    resolve_for_page(data, DocumentType::ImpactProject, slug)
        .await
        .and_then(Document::into_project)
}

#[get("/savvy-impact")]
pub async fn impact_page_handler(data: web::Data<AppState>) -> impl Responder {
    let projects: Vec<Project> = list_for_page(&data, DocumentType::ImpactProject)
        .await
        .into_iter()
        .filter_map(Document::into_project)
        .collect();

    page(base_document(
        &data.chrome,
        "Savvy Impact",
        html! {
            section.impact-intro data-motion=(motion_attr(&INTRO_MOTION)) style=(motion_style(&INTRO_MOTION)) {
                h1 { "Savvy Impact" }
                p { "Work with organisations that put people first." }
            }
            @if projects.is_empty() {
                p.empty { "No projects to show yet." }
            } @else {
                ul.project-grid {
                    @for p in &projects {
                        (project_card(p, &project_href(&p.slug.current)))
                    }
                }
            }
        },
    ))
}

#[get("/savvy-impact/project/{project_name}")]
pub async fn impact_project_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let Some(project) = resolve_project(&data, &slug).await else {
        return not_found_page(&data.chrome, &IMPACT);
    };

    let links = ProjectLinks {
        listing_href: IMPACT.href,
        listing_label: IMPACT.label,
        case_study_href: Some(case_study_href(&project.slug.current)),
    };

    page(project_page(&data.chrome, &project, &links))
}

#[get("/savvy-impact/project/case-study/{slug}")]
pub async fn case_study_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let Some(project) = resolve_project(&data, &slug).await else {
        return not_found_page(&data.chrome, &CASE_STUDIES);
    };

    let study = project_to_case_study(&project);
    let chrome = data.chrome.with_logo(project.theme_logo());

    page(case_study_page(
        &chrome,
        &study,
        &project_href(&study.slug),
        IMPACT.href,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::modules::content::application::ports::incoming::use_cases::ResolveDocumentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_lab_project;
    use crate::tests::support::stubs::StubResolveDocumentUseCase;

    async fn get_page(app_state: web::Data<AppState>, uri: &str) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(impact_page_handler)
                .service(case_study_page_handler)
                .service(impact_project_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn test_impact_listing_links_projects() {
        let (status, body) =
            get_page(TestAppStateBuilder::default().build(), "/savvy-impact").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/savvy-impact/project/clean-water-map""#));
        assert!(body.contains(r#"href="/savvy-impact/project/food-bank-routing""#));
    }

    #[actix_web::test]
    async fn test_long_form_project_page() {
        let (status, body) = get_page(
            TestAppStateBuilder::default().build(),
            "/savvy-impact/project/clean-water-map",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Clean Water Map"));
        assert!(body.contains("chapter-index"));
        assert!(body.contains(r#"href="/savvy-impact/project/case-study/clean-water-map""#));
    }

    #[actix_web::test]
    async fn test_unknown_project_renders_not_found() {
        let (status, body) = get_page(
            TestAppStateBuilder::default().build(),
            "/savvy-impact/project/does-not-exist",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Project not found"));
        assert!(body.contains(r#"href="/savvy-impact""#));
    }

    #[actix_web::test]
    async fn test_case_study_is_built_from_project() {
        let (status, body) = get_page(
            TestAppStateBuilder::default().build(),
            "/savvy-impact/project/case-study/clean-water-map",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Case study"));
        assert!(body.contains("Clean Water Map"));
        assert!(body.contains(r#"href="/savvy-impact/project/clean-water-map""#));
    }

    #[actix_web::test]
    async fn test_unknown_case_study_renders_not_found() {
        let (status, body) = get_page(
            TestAppStateBuilder::default().build(),
            "/savvy-impact/project/case-study/does-not-exist",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Case study not found"));
        assert!(body.contains("Back to Savvy Impact"));
    }

    #[actix_web::test]
    async fn test_lab_project_is_not_an_impact_project() {
        let (status, _) = get_page(
            TestAppStateBuilder::default().build(),
            "/savvy-impact/project/onbrd",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_case_study_uses_resolved_project() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_document(StubResolveDocumentUseCase::found(Document::ImpactProject(
                sample_lab_project("solar"),
            )))
            .build();

        let (status, body) =
            get_page(app_state, "/savvy-impact/project/case-study/solar").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Project solar"));
        assert!(!body.contains("Results"));
    }

    #[actix_web::test]
    async fn test_upstream_failure_renders_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_resolve_document(StubResolveDocumentUseCase::error(
                ResolveDocumentError::Upstream("boom".to_string()),
            ))
            .build();

        let (status, body) = get_page(app_state, "/savvy-impact/project/clean-water-map").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Project not found"));
    }
}
