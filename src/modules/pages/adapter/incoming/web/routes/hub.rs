use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::{list_for_page, not_found_page, page, resolve_for_page, Listing};
use crate::modules::content::domain::documents::{Document, DocumentType, PodcastEpisode};
use crate::modules::pages::adapter::incoming::web::views::hub::{episode_page, hub_page, HUB_HREF};
use crate::modules::podcast::domain::convert_timestamp_to_seconds;
use crate::AppState;

const HUB: Listing = Listing {
    href: HUB_HREF,
    label: "Back to Savvy Hub",
    not_found_title: "Episode not found",
    not_found_message: "We couldn't find that episode. It may have been renamed or removed.",
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeQuery {
    /// Start position, either seconds (`272`) or a timecode (`4:32`).
    pub t: Option<String>,
}

impl EpisodeQuery {
    fn position(&self) -> Option<u32> {
        let raw = self.t.as_deref()?.trim();
        raw.parse::<u32>()
            .ok()
            .or_else(|| convert_timestamp_to_seconds(raw).ok())
    }
}

#[get("/savvy-hub")]
pub async fn hub_page_handler(data: web::Data<AppState>) -> impl Responder {
    let mut episodes: Vec<PodcastEpisode> = list_for_page(&data, DocumentType::Podcast)
        .await
        .into_iter()
        .filter_map(Document::into_podcast)
        .collect();

    // newest first
    episodes.sort_by(|a, b| {
        (b.season_number, b.episode_number).cmp(&(a.season_number, a.episode_number))
    });

    page(hub_page(&data.chrome, &episodes))
}

#[get("/savvy-hub/podcast/{slug}")]
pub async fn podcast_page_handler(
    path: web::Path<String>,
    query: web::Query<EpisodeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match resolve_for_page(&data, DocumentType::Podcast, &slug)
        .await
        .and_then(Document::into_podcast)
    {
        Some(episode) => page(episode_page(&data.chrome, &episode, query.position())),
        None => not_found_page(&data.chrome, &HUB),
    }
}
