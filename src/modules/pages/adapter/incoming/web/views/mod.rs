pub mod case_study;
pub mod hub;
pub mod lab;
pub mod project;
pub mod start_project;

use maud::{html, Markup};

use crate::modules::content::domain::documents::{ImageRef, Testimonial};
use crate::shared::html::ScrollBinding;

// Motion presets shared by the pages.
pub(crate) const INTRO_MOTION: [ScrollBinding; 1] = [ScrollBinding::fade_out()];
pub(crate) const HERO_MOTION: [ScrollBinding; 2] =
    [ScrollBinding::fade_out(), ScrollBinding::shrink(0.9)];
pub(crate) const CARD_MOTION: [ScrollBinding; 2] =
    [ScrollBinding::fade_in(), ScrollBinding::rise(24.0)];
pub(crate) const CHAPTER_MOTION: [ScrollBinding; 2] =
    [ScrollBinding::fade_in(), ScrollBinding::rise(40.0)];
pub(crate) const STEP_MOTION: [ScrollBinding; 1] = [ScrollBinding::fade_in()];

/// Nothing is rendered for an image without a resolved url.
pub(crate) fn image(img: &ImageRef, class: &str) -> Markup {
    html! {
        @if let Some(src) = img.src() {
            figure class=(class) {
                img src=(src) alt=(img.alt_text()) loading="lazy";
                @if let Some(caption) = &img.caption {
                    figcaption { (caption) }
                }
            }
        }
    }
}

pub(crate) fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul.tags {
                @for tag in tags {
                    li.tag { (tag) }
                }
            }
        }
    }
}

pub(crate) fn testimonials(items: &[Testimonial]) -> Markup {
    html! {
        @if !items.is_empty() {
            section.testimonials {
                h2 { "What people say" }
                @for t in items {
                    blockquote {
                        p { (t.quote) }
                        footer {
                            cite { (t.author) }
                            @if let Some(role) = &t.role {
                                ", " (role)
                            }
                            @if let Some(company) = &t.company {
                                " at " (company)
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(crate) fn gallery(images: &[ImageRef]) -> Markup {
    html! {
        @if images.iter().any(|i| i.src().is_some()) {
            section.gallery {
                @for img in images {
                    (image(img, "gallery-item"))
                }
            }
        }
    }
}
