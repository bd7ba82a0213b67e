use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use maud::{html, Markup, DOCTYPE};

use crate::modules::content::domain::documents::{ImageRef, NavLink, SiteSettings};

const STYLESHEET: &str = "/static/site.css";
const MOTION_SCRIPT: &str = "/static/motion.js";

/// What the header shows. Built once from site settings; a page that carries its own
/// branding derives a copy with `with_logo` instead of touching shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteChrome {
    pub site_title: String,
    pub logo: Option<ImageRef>,
    pub navigation: Vec<NavLink>,
}

impl SiteChrome {
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            site_title: settings.title.clone(),
            logo: settings.logo.clone(),
            navigation: settings.navigation.clone(),
        }
    }

    /// Replaces the logo when `logo` is present, otherwise keeps the site default.
    pub fn with_logo(&self, logo: Option<&ImageRef>) -> Self {
        match logo {
            Some(logo) => Self {
                logo: Some(logo.clone()),
                ..self.clone()
            },
            None => self.clone(),
        }
    }
}

pub fn base_document(chrome: &SiteChrome, title: &str, content: Markup) -> Markup {
    let full_title = if title == chrome.site_title {
        title.to_string()
    } else {
        format!("{} | {}", title, chrome.site_title)
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                link rel="stylesheet" href=(STYLESHEET);
                script src=(MOTION_SCRIPT) defer {}
            }
            body {
                (site_header(chrome))
                main { (content) }
                footer.site-footer {
                    p { "© " (chrome.site_title) }
                }
            }
        }
    }
}

pub fn site_header(chrome: &SiteChrome) -> Markup {
    let logo = chrome.logo.as_ref().and_then(|logo| {
        let alt = match logo.alt_text() {
            "" => chrome.site_title.as_str(),
            alt => alt,
        };
        logo.src().map(|src| (src, alt))
    });

    html! {
        header.site-header {
            a.brand href="/" {
                @if let Some((src, alt)) = logo {
                    img.logo src=(src) alt=(alt);
                } @else {
                    span.wordmark { (chrome.site_title) }
                }
            }
            @if !chrome.navigation.is_empty() {
                nav.site-nav {
                    ul {
                        @for link in &chrome.navigation {
                            li { a href=(link.href) { (link.label) } }
                        }
                    }
                }
            }
        }
    }
}

/// Fixed fallback for any slug that does not resolve.
pub fn not_found_view(
    chrome: &SiteChrome,
    title: &str,
    message: &str,
    listing_href: &str,
    listing_label: &str,
) -> Markup {
    base_document(
        chrome,
        title,
        html! {
            section.not-found {
                h1 { (title) }
                p { (message) }
                a.back-link href=(listing_href) { (listing_label) }
            }
        },
    )
}

pub fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}
