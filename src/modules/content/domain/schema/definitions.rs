// src/modules/content/domain/schema/definitions.rs

use crate::modules::content::domain::documents::DocumentType;
use crate::modules::content::domain::schema::rules::{DocumentSchema, FieldDef, FieldKind, Rule};

pub const HEX_COLOR: &str = r"^#(?:[0-9a-fA-F]{3}){1,2}$";
pub const TIMECODE: &str = r"^\d{1,2}:\d{2}(:\d{2})?$";

pub const EVENT_TYPES: &[&str] = &["workshop", "meetup", "webinar", "conference", "demo-day"];
pub const EVENT_STATUSES: &[&str] = &["upcoming", "live", "past", "canceled", "postponed"];
pub const EVENT_FORMATS: &[&str] = &["online", "in-person", "hybrid"];
pub const VENTURE_STAGES: &[&str] = &["idea", "building", "launched", "acquired"];
pub const PRODUCT_STATUSES: &[&str] = &["Live", "Beta", "Coming Soon"];

const PROJECT_TYPES: &[&str] = &["impactProject", "labProject"];
const TEAM_MEMBER: &[&str] = &["teamMember"];

fn array_of(kind: FieldKind) -> FieldKind {
    FieldKind::Array(Box::new(kind))
}

fn image(name: &'static str) -> FieldDef {
    FieldDef::new(name, FieldKind::Image)
}

fn slug() -> FieldDef {
    FieldDef::new("slug", FieldKind::Slug).required()
}

fn social_links(name: &'static str) -> FieldDef {
    FieldDef::new(
        name,
        array_of(FieldKind::Object(vec![
            FieldDef::new("platform", FieldKind::String).required(),
            FieldDef::new("url", FieldKind::Url).required(),
        ])),
    )
}

/// Declared field list for a document type.
pub fn schema_for(doc_type: DocumentType) -> DocumentSchema {
    match doc_type {
        DocumentType::ImpactProject => DocumentSchema {
            doc_type,
            title: "Impact Project",
            fields: project_fields(),
        },
        DocumentType::LabProject => DocumentSchema {
            doc_type,
            title: "Lab Project",
            fields: project_fields(),
        },
        DocumentType::Post => DocumentSchema {
            doc_type,
            title: "Blog Post",
            fields: post_fields(),
        },
        DocumentType::Event => DocumentSchema {
            doc_type,
            title: "Event",
            fields: event_fields(),
        },
        DocumentType::Podcast => DocumentSchema {
            doc_type,
            title: "Podcast Episode",
            fields: podcast_fields(),
        },
        DocumentType::TeamMember => DocumentSchema {
            doc_type,
            title: "Team Member",
            fields: vec![
                FieldDef::new("name", FieldKind::String).required(),
                slug(),
                FieldDef::new("role", FieldKind::String).required(),
                image("photo"),
                FieldDef::new("bio", FieldKind::Text).max(1000),
                social_links("socials"),
                FieldDef::new("order", FieldKind::Number),
            ],
        },
        DocumentType::Venture => DocumentSchema {
            doc_type,
            title: "Venture",
            fields: vec![
                FieldDef::new("name", FieldKind::String).required(),
                slug(),
                FieldDef::new("summary", FieldKind::Text).max(280),
                FieldDef::new("stage", FieldKind::Enum(VENTURE_STAGES)),
                FieldDef::new("website", FieldKind::Url),
                image("logo"),
                FieldDef::new("foundedYear", FieldKind::Number)
                    .min(1900)
                    .max(2100),
            ],
        },
        DocumentType::SiteSettings => DocumentSchema {
            doc_type,
            title: "Site Settings",
            fields: vec![
                FieldDef::new("title", FieldKind::String).required(),
                FieldDef::new("description", FieldKind::Text),
                image("logo"),
                FieldDef::new(
                    "navigation",
                    array_of(FieldKind::Object(vec![
                        FieldDef::new("label", FieldKind::String).required(),
                        FieldDef::new("href", FieldKind::String).required(),
                    ])),
                ),
                social_links("socialLinks"),
            ],
        },
        DocumentType::Product => DocumentSchema {
            doc_type,
            title: "Product",
            fields: vec![
                FieldDef::new("name", FieldKind::String).required(),
                slug(),
                FieldDef::new("tagline", FieldKind::String).max(120),
                FieldDef::new("description", FieldKind::Text).required(),
                FieldDef::new("category", FieldKind::String).required(),
                FieldDef::new("status", FieldKind::Enum(PRODUCT_STATUSES)).required(),
                FieldDef::new("features", array_of(FieldKind::String)),
                FieldDef::new("tags", array_of(FieldKind::String)),
                FieldDef::new("url", FieldKind::Url),
                image("image"),
            ],
        },
    }
}

fn project_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", FieldKind::String).required().max(120),
        FieldDef::new("subtitle", FieldKind::String).max(200),
        slug(),
        FieldDef::new("description", FieldKind::Text),
        image("heroImage").required(),
        FieldDef::new("tags", array_of(FieldKind::String))
            .required()
            .min(1),
        FieldDef::new(
            "theme",
            FieldKind::Object(vec![
                FieldDef::new("primaryColor", FieldKind::String).rule(Rule::Pattern(HEX_COLOR)),
                FieldDef::new("secondaryColor", FieldKind::String).rule(Rule::Pattern(HEX_COLOR)),
                FieldDef::new("backgroundColor", FieldKind::String)
                    .rule(Rule::Pattern(HEX_COLOR)),
                FieldDef::new("textColor", FieldKind::String).rule(Rule::Pattern(HEX_COLOR)),
                FieldDef::new("headingFont", FieldKind::String),
                FieldDef::new("bodyFont", FieldKind::String),
                image("logo"),
            ]),
        ),
        FieldDef::new(
            "features",
            array_of(FieldKind::Object(vec![
                FieldDef::new("title", FieldKind::String).required(),
                FieldDef::new("description", FieldKind::Text),
                FieldDef::new("icon", FieldKind::String),
            ])),
        ),
        FieldDef::new(
            "testimonials",
            array_of(FieldKind::Object(vec![
                FieldDef::new("quote", FieldKind::Text).required(),
                FieldDef::new("author", FieldKind::String).required(),
                FieldDef::new("role", FieldKind::String),
                FieldDef::new("company", FieldKind::String),
            ])),
        ),
        FieldDef::new("gallery", array_of(FieldKind::Image)),
        FieldDef::new(
            "chapters",
            array_of(FieldKind::Object(vec![
                FieldDef::new("title", FieldKind::String).required(),
                FieldDef::new("eyebrow", FieldKind::String),
                FieldDef::new("body", FieldKind::Text).required(),
                image("image"),
            ])),
        ),
        FieldDef::new(
            "metrics",
            array_of(FieldKind::Object(vec![
                FieldDef::new("label", FieldKind::String).required(),
                FieldDef::new("value", FieldKind::String).required(),
            ])),
        ),
        FieldDef::new(
            "relatedProjects",
            array_of(FieldKind::Reference { to: PROJECT_TYPES }),
        ),
        FieldDef::new("website", FieldKind::Url),
    ]
}

fn post_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", FieldKind::String).required().max(160),
        slug(),
        FieldDef::new("authors", array_of(FieldKind::Reference { to: TEAM_MEMBER }))
            .required()
            .min(1),
        image("mainImage"),
        FieldDef::new("excerpt", FieldKind::Text).max(300),
        FieldDef::new("content", FieldKind::Block).required(),
        FieldDef::new("categories", array_of(FieldKind::String)),
        FieldDef::new(
            "seo",
            FieldKind::Object(vec![
                FieldDef::new("metaTitle", FieldKind::String).max(60),
                FieldDef::new("metaDescription", FieldKind::Text).max(160),
                image("ogImage"),
                FieldDef::new("noIndex", FieldKind::Boolean),
            ]),
        ),
        FieldDef::new("publishedAt", FieldKind::DateTime).required(),
    ]
}

fn event_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", FieldKind::String).required(),
        slug(),
        FieldDef::new("eventType", FieldKind::Enum(EVENT_TYPES)).required(),
        FieldDef::new("status", FieldKind::Enum(EVENT_STATUSES)).required(),
        FieldDef::new("format", FieldKind::Enum(EVENT_FORMATS)).required(),
        FieldDef::new("dateTime", FieldKind::DateTime).required(),
        FieldDef::new("endDateTime", FieldKind::DateTime),
        FieldDef::new(
            "location",
            FieldKind::Object(vec![
                FieldDef::new("venue", FieldKind::String),
                FieldDef::new("address", FieldKind::String),
                FieldDef::new("city", FieldKind::String),
            ]),
        ),
        FieldDef::new("onlineUrl", FieldKind::Url),
        FieldDef::new("registrationUrl", FieldKind::Url),
        FieldDef::new("recordingUrl", FieldKind::Url),
        FieldDef::new("cancellationReason", FieldKind::Text),
        FieldDef::new("description", FieldKind::Text),
        FieldDef::new(
            "speakers",
            array_of(FieldKind::Object(vec![
                FieldDef::new("name", FieldKind::String).required(),
                FieldDef::new("title", FieldKind::String),
                image("photo"),
            ])),
        ),
        FieldDef::new(
            "agenda",
            array_of(FieldKind::Object(vec![
                FieldDef::new("time", FieldKind::String).required(),
                FieldDef::new("title", FieldKind::String).required(),
                FieldDef::new("speaker", FieldKind::String),
            ])),
        ),
    ]
}

fn podcast_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", FieldKind::String).required(),
        slug(),
        FieldDef::new("episodeNumber", FieldKind::Number)
            .required()
            .min(1),
        FieldDef::new("seasonNumber", FieldKind::Number).min(1),
        FieldDef::new("description", FieldKind::Text),
        FieldDef::new("audioUrl", FieldKind::Url).required(),
        FieldDef::new("duration", FieldKind::String).rule(Rule::Pattern(TIMECODE)),
        image("coverImage"),
        FieldDef::new("publishedAt", FieldKind::DateTime),
        FieldDef::new(
            "guests",
            array_of(FieldKind::Object(vec![
                FieldDef::new("name", FieldKind::String).required(),
                FieldDef::new("role", FieldKind::String),
                FieldDef::new("company", FieldKind::String),
                image("photo"),
            ])),
        ),
        FieldDef::new(
            "segments",
            array_of(FieldKind::Object(vec![
                FieldDef::new("timestamp", FieldKind::String)
                    .required()
                    .rule(Rule::Pattern(TIMECODE)),
                FieldDef::new("title", FieldKind::String).required(),
                FieldDef::new("description", FieldKind::Text),
            ])),
        ),
        FieldDef::new(
            "transcript",
            array_of(FieldKind::Object(vec![
                FieldDef::new("timestamp", FieldKind::String).rule(Rule::Pattern(TIMECODE)),
                FieldDef::new("speaker", FieldKind::String).required(),
                FieldDef::new("text", FieldKind::Text).required(),
            ])),
        ),
    ]
}
