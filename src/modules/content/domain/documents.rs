// src/modules/content/domain/documents.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Document types
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    ImpactProject,
    LabProject,
    Post,
    Event,
    Podcast,
    TeamMember,
    Venture,
    SiteSettings,
    Product,
}

impl DocumentType {
    pub const ALL: [DocumentType; 9] = [
        DocumentType::ImpactProject,
        DocumentType::LabProject,
        DocumentType::Post,
        DocumentType::Event,
        DocumentType::Podcast,
        DocumentType::TeamMember,
        DocumentType::Venture,
        DocumentType::SiteSettings,
        DocumentType::Product,
    ];

    /// The `_type` discriminator used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ImpactProject => "impactProject",
            DocumentType::LabProject => "labProject",
            DocumentType::Post => "post",
            DocumentType::Event => "event",
            DocumentType::Podcast => "podcast",
            DocumentType::TeamMember => "teamMember",
            DocumentType::Venture => "venture",
            DocumentType::SiteSettings => "siteSettings",
            DocumentType::Product => "product",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Shared field shapes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self {
            current: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// An image field. Remote documents carry an asset reference (the adapter fills in `url`),
/// static documents carry the url directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageRef {
    pub fn from_url(url: &str, alt: &str) -> Self {
        Self {
            asset: None,
            url: Some(url.to_string()),
            alt: Some(alt.to_string()),
            caption: None,
        }
    }

    pub fn src(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

//
// ──────────────────────────────────────────────────────────
// Impact / Lab project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub logo: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub body: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<ImageRef>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub gallery: Vec<ImageRef>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub related_projects: Vec<Reference>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Project {
    /// Chapters switch the detail page to the long-form layout.
    pub fn is_long_form(&self) -> bool {
        !self.chapters.is_empty()
    }

    pub fn theme_logo(&self) -> Option<&ImageRef> {
        self.theme.as_ref().and_then(|t| t.logo.as_ref())
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog post
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
}

impl TextBlock {
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Rich-text block. Block kinds this site does not render decode as `Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ContentBlock {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageRef),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub og_image: Option<ImageRef>,
    #[serde(default)]
    pub no_index: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub authors: Vec<Reference>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub seo: Option<Seo>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Event
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Live,
    Past,
    Canceled,
    Postponed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventFormat {
    Online,
    InPerson,
    Hybrid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLocation {
    pub venue: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub photo: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub speaker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub event_type: String,
    pub status: EventStatus,
    pub format: EventFormat,
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<EventLocation>,
    #[serde(default)]
    pub online_url: Option<String>,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub agenda: Vec<AgendaItem>,
}

//
// ──────────────────────────────────────────────────────────
// Podcast episode
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub photo: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// `mm:ss` or `h:mm:ss` from the start of the episode.
    pub timestamp: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub speaker: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastEpisode {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub episode_number: u32,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    pub audio_url: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub transcript: Vec<TranscriptLine>,
}

//
// ──────────────────────────────────────────────────────────
// Attribute bags
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub role: String,
    #[serde(default)]
    pub photo: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venture {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub founded_year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

//
// ──────────────────────────────────────────────────────────
// Product
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Live,
    Beta,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Live => "Live",
            ProductStatus::Beta => "Beta",
            ProductStatus::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub tagline: Option<String>,
    pub description: String,
    pub category: String,
    pub status: ProductStatus,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

//
// ──────────────────────────────────────────────────────────
// Document (tagged by `_type`)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Document {
    #[serde(rename = "impactProject")]
    ImpactProject(Project),
    #[serde(rename = "labProject")]
    LabProject(Project),
    #[serde(rename = "post")]
    Post(BlogPost),
    #[serde(rename = "event")]
    Event(Event),
    #[serde(rename = "podcast")]
    Podcast(PodcastEpisode),
    #[serde(rename = "teamMember")]
    TeamMember(TeamMember),
    #[serde(rename = "venture")]
    Venture(Venture),
    #[serde(rename = "siteSettings")]
    SiteSettings(SiteSettings),
    #[serde(rename = "product")]
    Product(Product),
}

impl Document {
    pub fn document_type(&self) -> DocumentType {
        match self {
            Document::ImpactProject(_) => DocumentType::ImpactProject,
            Document::LabProject(_) => DocumentType::LabProject,
            Document::Post(_) => DocumentType::Post,
            Document::Event(_) => DocumentType::Event,
            Document::Podcast(_) => DocumentType::Podcast,
            Document::TeamMember(_) => DocumentType::TeamMember,
            Document::Venture(_) => DocumentType::Venture,
            Document::SiteSettings(_) => DocumentType::SiteSettings,
            Document::Product(_) => DocumentType::Product,
        }
    }

    /// Site settings is a singleton and has no slug.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Document::ImpactProject(p) | Document::LabProject(p) => Some(&p.slug.current),
            Document::Post(p) => Some(&p.slug.current),
            Document::Event(e) => Some(&e.slug.current),
            Document::Podcast(p) => Some(&p.slug.current),
            Document::TeamMember(m) => Some(&m.slug.current),
            Document::Venture(v) => Some(&v.slug.current),
            Document::Product(p) => Some(&p.slug.current),
            Document::SiteSettings(_) => None,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Document::ImpactProject(p) | Document::LabProject(p) => &p.title,
            Document::Post(p) => &p.title,
            Document::Event(e) => &e.title,
            Document::Podcast(p) => &p.title,
            Document::TeamMember(m) => &m.name,
            Document::Venture(v) => &v.name,
            Document::SiteSettings(s) => &s.title,
            Document::Product(p) => &p.name,
        }
    }

    pub fn into_project(self) -> Option<Project> {
        match self {
            Document::ImpactProject(p) | Document::LabProject(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_podcast(self) -> Option<PodcastEpisode> {
        match self {
            Document::Podcast(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_product(self) -> Option<Product> {
        match self {
            Document::Product(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_type_parses_wire_names() {
        assert_eq!(
            "labProject".parse::<DocumentType>(),
            Ok(DocumentType::LabProject)
        );
        assert_eq!(
            "teamMember".parse::<DocumentType>(),
            Ok(DocumentType::TeamMember)
        );
        assert!("LabProject".parse::<DocumentType>().is_err());
    }

    #[test]
    fn decodes_project_from_wire_json() {
        let raw = json!({
            "_type": "impactProject",
            "_id": "p-1",
            "title": "Clean Water Map",
            "slug": { "_type": "slug", "current": "clean-water-map" },
            "tags": ["civic"],
            "heroImage": { "asset": { "_ref": "image-abc-800x600-png" } },
            "chapters": [{ "title": "Intro", "body": "Once upon a time" }]
        });

        let doc: Document = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.document_type(), DocumentType::ImpactProject);
        assert_eq!(doc.slug(), Some("clean-water-map"));

        let project = doc.into_project().unwrap();
        assert!(project.is_long_form());
        assert!(project.features.is_none());
        assert_eq!(
            project.hero_image.unwrap().asset.unwrap().reference,
            "image-abc-800x600-png"
        );
    }

    #[test]
    fn unknown_rich_text_blocks_decode_as_unsupported() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
            { "_type": "block", "style": "normal", "children": [{ "text": "Hello " }, { "text": "world" }] },
            { "_type": "codeSandbox", "id": "x" }
        ]))
        .unwrap();

        match &blocks[0] {
            ContentBlock::Text(b) => assert_eq!(b.plain_text(), "Hello world"),
            other => panic!("expected text block, got {:?}", other),
        }
        assert_eq!(blocks[1], ContentBlock::Unsupported);
    }

    #[test]
    fn event_enums_use_editor_values() {
        let format: EventFormat = serde_json::from_value(json!("in-person")).unwrap();
        assert_eq!(format, EventFormat::InPerson);

        let status: EventStatus = serde_json::from_value(json!("postponed")).unwrap();
        assert_eq!(status, EventStatus::Postponed);
    }

    #[test]
    fn product_status_coming_soon_has_spaced_name() {
        let status: ProductStatus = serde_json::from_value(json!("Coming Soon")).unwrap();
        assert_eq!(status, ProductStatus::ComingSoon);
        assert_eq!(status.as_str(), "Coming Soon");
    }
}
