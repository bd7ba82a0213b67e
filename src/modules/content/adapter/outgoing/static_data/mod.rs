// Content bundled with the binary. Lab projects and products never lived in the hosted
// store; the rest mirrors what the store holds so the site runs without credentials.

mod impact_projects;
mod lab_projects;
mod podcasts;
mod products;
mod site;

use crate::modules::content::domain::documents::Document;

pub use impact_projects::impact_projects;
pub use lab_projects::lab_projects;
pub use podcasts::podcast_episodes;
pub use products::products;
pub use site::{blog_posts, events, site_settings, team_members, ventures};

pub fn bundled_documents() -> Vec<Document> {
    let mut docs = Vec::new();

    docs.extend(lab_projects().into_iter().map(Document::LabProject));
    docs.extend(impact_projects().into_iter().map(Document::ImpactProject));
    docs.extend(podcast_episodes().into_iter().map(Document::Podcast));
    docs.extend(products().into_iter().map(Document::Product));
    docs.extend(team_members().into_iter().map(Document::TeamMember));
    docs.extend(ventures().into_iter().map(Document::Venture));
    docs.extend(events().into_iter().map(Document::Event));
    docs.extend(blog_posts().into_iter().map(Document::Post));
    docs.push(Document::SiteSettings(site_settings()));

    docs
}
