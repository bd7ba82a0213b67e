use maud::{html, Markup};

use super::{
    gallery, image, tag_list, testimonials, CARD_MOTION, CHAPTER_MOTION, HERO_MOTION,
};
use crate::modules::content::domain::documents::{Chapter, Feature, Metric, Project, Theme};
use crate::shared::html::{base_document, motion_attr, motion_style, SiteChrome};

/// Where the back link and the optional case-study link point.
pub struct ProjectLinks<'a> {
    pub listing_href: &'a str,
    pub listing_label: &'a str,
    pub case_study_href: Option<String>,
}

/// Detail page for an impact or lab project. Chapters switch to the long-form layout.
/// The header shows the project's own logo when its theme has one.
pub fn project_page(chrome: &SiteChrome, project: &Project, links: &ProjectLinks) -> Markup {
    let chrome = chrome.with_logo(project.theme_logo());

    let body = if project.is_long_form() {
        long_form(project, links)
    } else {
        standard(project, links)
    };

    base_document(
        &chrome,
        &project.title,
        html! {
            article.project style=[theme_style(project.theme.as_ref())] {
                (body)
            }
        },
    )
}

/// CSS custom properties from the project theme.
pub(crate) fn theme_style(theme: Option<&Theme>) -> Option<String> {
    let theme = theme?;
    let vars: Vec<String> = [
        ("--color-primary", &theme.primary_color),
        ("--color-secondary", &theme.secondary_color),
        ("--color-background", &theme.background_color),
        ("--color-text", &theme.text_color),
        ("--font-heading", &theme.heading_font),
        ("--font-body", &theme.body_font),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.as_deref().map(|v| format!("{name}:{v}")))
    .collect();

    (!vars.is_empty()).then(|| vars.join(";"))
}

fn hero(project: &Project) -> Markup {
    html! {
        header.project-hero data-motion=(motion_attr(&HERO_MOTION)) style=(motion_style(&HERO_MOTION)) {
            h1 { (project.title) }
            @if let Some(subtitle) = &project.subtitle {
                p.subtitle { (subtitle) }
            }
            (tag_list(&project.tags))
            @if let Some(img) = &project.hero_image {
                (image(img, "hero-image"))
            }
        }
    }
}

fn features(items: &[Feature]) -> Markup {
    html! {
        @if !items.is_empty() {
            section.features {
                h2 { "Features" }
                ul {
                    @for f in items {
                        li.feature data-motion=(motion_attr(&CARD_MOTION)) style=(motion_style(&CARD_MOTION)) {
                            h3 { (f.title) }
                            @if let Some(d) = &f.description {
                                p { (d) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(crate) fn metrics(items: &[Metric]) -> Markup {
    html! {
        @if !items.is_empty() {
            section.metrics {
                @for m in items {
                    div.metric {
                        strong.metric-value { (m.value) }
                        span.metric-label { (m.label) }
                    }
                }
            }
        }
    }
}

fn chapter(index: usize, c: &Chapter) -> Markup {
    html! {
        section.chapter id={ "chapter-" (index + 1) } data-motion=(motion_attr(&CHAPTER_MOTION)) style=(motion_style(&CHAPTER_MOTION)) {
            @if let Some(eyebrow) = &c.eyebrow {
                p.eyebrow { (eyebrow) }
            }
            h2 { (c.title) }
            p { (c.body) }
            @if let Some(img) = &c.image {
                (image(img, "chapter-image"))
            }
        }
    }
}

fn footer_links(project: &Project, links: &ProjectLinks) -> Markup {
    html! {
        nav.project-links {
            @if let Some(website) = &project.website {
                a.website href=(website) rel="noopener" target="_blank" { "Visit website" }
            }
            @if let Some(href) = &links.case_study_href {
                a.case-study-link href=(href) { "Read the case study" }
            }
            a.back-link href=(links.listing_href) { (links.listing_label) }
        }
    }
}

fn standard(project: &Project, links: &ProjectLinks) -> Markup {
    html! {
        (hero(project))
        @if let Some(description) = &project.description {
            section.description { p { (description) } }
        }
        @if let Some(items) = &project.features {
            (features(items))
        }
        (metrics(&project.metrics))
        (gallery(&project.gallery))
        (testimonials(&project.testimonials))
        (footer_links(project, links))
    }
}

fn long_form(project: &Project, links: &ProjectLinks) -> Markup {
    html! {
        (hero(project))
        @if let Some(description) = &project.description {
            section.lede { p { (description) } }
        }
        nav.chapter-index {
            ol {
                @for (i, c) in project.chapters.iter().enumerate() {
                    li { a href={ "#chapter-" (i + 1) } { (c.title) } }
                }
            }
        }
        @for (i, c) in project.chapters.iter().enumerate() {
            (chapter(i, c))
        }
        (metrics(&project.metrics))
        @if let Some(items) = &project.features {
            (features(items))
        }
        (gallery(&project.gallery))
        (testimonials(&project.testimonials))
        (footer_links(project, links))
    }
}
