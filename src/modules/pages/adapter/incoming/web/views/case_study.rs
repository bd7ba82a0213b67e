use maud::{html, Markup};

use super::project::metrics;
use super::{gallery, image, tag_list, testimonials, INTRO_MOTION, STEP_MOTION};
use crate::modules::case_study::domain::CaseStudy;
use crate::shared::html::{base_document, motion_attr, motion_style, SiteChrome};

pub fn case_study_page(
    chrome: &SiteChrome,
    study: &CaseStudy,
    project_href: &str,
    listing_href: &str,
) -> Markup {
    base_document(
        chrome,
        &study.title,
        html! {
            article.case-study {
                header.case-study-hero data-motion=(motion_attr(&INTRO_MOTION)) style=(motion_style(&INTRO_MOTION)) {
                    p.eyebrow { "Case study" }
                    h1 { (study.title) }
                    @if let Some(summary) = &study.summary {
                        p.subtitle { (summary) }
                    }
                    (tag_list(&study.tags))
                    @if let Some(img) = &study.hero_image {
                        (image(img, "hero-image"))
                    }
                }

                @if let Some(challenge) = &study.challenge {
                    section.challenge {
                        h2 { "The challenge" }
                        p { (challenge) }
                    }
                }

                @if !study.approach.is_empty() {
                    section.approach {
                        h2 { "Our approach" }
                        @for step in &study.approach {
                            div.approach-step data-motion=(motion_attr(&STEP_MOTION)) style=(motion_style(&STEP_MOTION)) {
                                h3 { (step.heading) }
                                p { (step.body) }
                                @if let Some(img) = &step.image {
                                    (image(img, "approach-image"))
                                }
                            }
                        }
                    }
                }

                @if !study.solution.is_empty() {
                    section.solution {
                        h2 { "The solution" }
                        ul {
                            @for f in &study.solution {
                                li {
                                    strong { (f.title) }
                                    @if let Some(d) = &f.description {
                                        " " (d)
                                    }
                                }
                            }
                        }
                    }
                }

                @if study.has_results() {
                    section.results {
                        h2 { "Results" }
                        (metrics(&study.results))
                    }
                }

                (testimonials(&study.testimonials))
                (gallery(&study.gallery))

                nav.project-links {
                    @if let Some(website) = &study.website {
                        a.website href=(website) rel="noopener" target="_blank" { "Visit website" }
                    }
                    a href=(project_href) { "View the project" }
                    a.back-link href=(listing_href) { "Back to Savvy Impact" }
                }
            }
        },
    )
}
