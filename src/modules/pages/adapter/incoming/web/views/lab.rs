use maud::{html, Markup};

use super::{image, tag_list, CARD_MOTION, INTRO_MOTION};
use crate::modules::catalog::application::ports::incoming::use_cases::ProductListing;
use crate::modules::catalog::domain::{ProductFilter, ALL};
use crate::modules::content::domain::documents::{Product, ProductStatus, Project};
use crate::shared::html::{base_document, motion_attr, motion_style, SiteChrome};

pub const LAB_HREF: &str = "/savvy-lab";

const STATUSES: [ProductStatus; 3] = [
    ProductStatus::Live,
    ProductStatus::Beta,
    ProductStatus::ComingSoon,
];

pub fn project_card(project: &Project, href: &str) -> Markup {
    html! {
        li.project-card data-motion=(motion_attr(&CARD_MOTION)) style=(motion_style(&CARD_MOTION)) {
            a href=(href) {
                @if let Some(img) = &project.hero_image {
                    (image(img, "card-image"))
                }
                h3 { (project.title) }
            }
            @if let Some(subtitle) = &project.subtitle {
                p { (subtitle) }
            }
            (tag_list(&project.tags))
        }
    }
}

fn product_card(product: &Product) -> Markup {
    html! {
        li.product-card data-category=(product.category) data-status=(product.status.as_str()) {
            h3 { (product.name) }
            span.status { (product.status.as_str()) }
            @if let Some(tagline) = &product.tagline {
                p.tagline { (tagline) }
            }
            p { (product.description) }
            @if let Some(features) = &product.features {
                @if !features.is_empty() {
                    ul.product-features {
                        @for f in features {
                            li { (f) }
                        }
                    }
                }
            }
            (tag_list(&product.tags))
            @if let Some(url) = &product.url {
                a href=(url) rel="noopener" target="_blank" { "Learn more" }
            }
        }
    }
}

fn filter_form(categories: &[String], filter: &ProductFilter) -> Markup {
    let category = filter.category.as_deref().unwrap_or(ALL);
    let status = filter.status.as_deref().unwrap_or(ALL);
    let search = filter.search.as_deref().unwrap_or("");

    html! {
        form.product-filter method="get" action=(LAB_HREF) {
            label {
                "Category "
                select name="category" {
                    option value=(ALL) selected[category == ALL] { (ALL) }
                    @for c in categories {
                        option value=(c) selected[category == c] { (c) }
                    }
                }
            }
            label {
                "Status "
                select name="status" {
                    option value=(ALL) selected[status == ALL] { (ALL) }
                    @for s in STATUSES {
                        option value=(s.as_str()) selected[status == s.as_str()] { (s.as_str()) }
                    }
                }
            }
            label {
                "Search "
                input type="search" name="search" value=(search) placeholder="Search products";
            }
            button type="submit" { "Filter" }
        }
    }
}

pub fn lab_page(
    chrome: &SiteChrome,
    projects: &[Project],
    listing: &ProductListing,
    filter: &ProductFilter,
) -> Markup {
    base_document(
        chrome,
        "Savvy Lab",
        html! {
            section.lab-intro data-motion=(motion_attr(&INTRO_MOTION)) style=(motion_style(&INTRO_MOTION)) {
                h1 { "Savvy Lab" }
                p { "Products we build for ourselves, to learn what we later build for others." }
            }

            @if !projects.is_empty() {
                section.lab-projects {
                    h2 { "Lab projects" }
                    ul.project-grid {
                        @for p in projects {
                            (project_card(p, &format!("{}/{}", LAB_HREF, p.slug.current)))
                        }
                    }
                }
            }

            section #products.products {
                h2 { "Products" }
                (filter_form(&listing.categories, filter))
                p.result-count { (listing.total) " products" }
                @if listing.products.is_empty() {
                    p.empty { "No products match these filters." }
                } @else {
                    ul.product-grid {
                        @for product in &listing.products {
                            (product_card(product))
                        }
                    }
                }
            }
        },
    )
}
