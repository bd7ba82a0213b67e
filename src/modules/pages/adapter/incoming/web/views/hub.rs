use maud::{html, Markup};

use super::{image, INTRO_MOTION};
use crate::modules::content::domain::documents::{PodcastEpisode, Segment};
use crate::modules::podcast::domain::{active_segment, convert_timestamp_to_seconds, format_time};
use crate::shared::html::{base_document, motion_attr, motion_style, SiteChrome};

pub const HUB_HREF: &str = "/savvy-hub";

pub fn episode_href(episode: &PodcastEpisode) -> String {
    format!("{}/podcast/{}", HUB_HREF, episode.slug.current)
}

pub fn hub_page(chrome: &SiteChrome, episodes: &[PodcastEpisode]) -> Markup {
    base_document(
        chrome,
        "Savvy Hub",
        html! {
            section.hub-intro data-motion=(motion_attr(&INTRO_MOTION)) style=(motion_style(&INTRO_MOTION)) {
                h1 { "Savvy Hub" }
                p { "Conversations with the people building products that matter." }
            }
            @if episodes.is_empty() {
                p.empty { "No episodes yet. Check back soon." }
            } @else {
                ul.episode-list {
                    @for ep in episodes {
                        li.episode-card {
                            a href=(episode_href(ep)) {
                                span.episode-number { "Episode " (ep.episode_number) }
                                h2 { (ep.title) }
                            }
                            @if let Some(d) = &ep.description {
                                p { (d) }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// A segment links into the audio at its start time. Segments with a malformed
/// timestamp are listed without a link.
fn segment_item(audio_url: &str, segment: &Segment, is_active: bool) -> Markup {
    html! {
        li.segment.active[is_active] aria-current=[is_active.then_some("true")] {
            @match convert_timestamp_to_seconds(&segment.timestamp) {
                Ok(secs) => {
                    a.timecode href={ (audio_url) "#t=" (secs) } data-seconds=(secs) {
                        (format_time(secs))
                    }
                }
                Err(_) => {
                    span.timecode { (segment.timestamp) }
                }
            }
            " "
            span.segment-title { (segment.title) }
            @if let Some(d) = &segment.description {
                p { (d) }
            }
        }
    }
}

/// `position` (seconds) starts playback there and marks the segment playing at that point.
pub fn episode_page(chrome: &SiteChrome, episode: &PodcastEpisode, position: Option<u32>) -> Markup {
    let active = position.and_then(|p| active_segment(&episode.segments, p));
    let audio_src = match position {
        Some(p) => format!("{}#t={}", episode.audio_url, p),
        None => episode.audio_url.clone(),
    };

    base_document(
        chrome,
        &episode.title,
        html! {
            article.episode {
                header.episode-hero {
                    p.eyebrow {
                        @if let Some(season) = episode.season_number {
                            "Season " (season) " · "
                        }
                        "Episode " (episode.episode_number)
                    }
                    h1 { (episode.title) }
                    @if let Some(img) = &episode.cover_image {
                        (image(img, "cover-image"))
                    }
                }

                audio #episode-audio controls preload="metadata" src=(audio_src) {}
                @if let Some(duration) = &episode.duration {
                    p.duration { "Duration " (duration) }
                }

                @if let Some(d) = &episode.description {
                    section.description { p { (d) } }
                }

                @if !episode.guests.is_empty() {
                    section.guests {
                        h2 { "Guests" }
                        ul {
                            @for g in &episode.guests {
                                li {
                                    strong { (g.name) }
                                    @if let Some(role) = &g.role {
                                        ", " (role)
                                    }
                                    @if let Some(company) = &g.company {
                                        " at " (company)
                                    }
                                }
                            }
                        }
                    }
                }

                @if !episode.segments.is_empty() {
                    section.segments {
                        h2 { "In this episode" }
                        ol {
                            @for s in &episode.segments {
                                (segment_item(
                                    &episode.audio_url,
                                    s,
                                    active.is_some_and(|a| std::ptr::eq(a, s)),
                                ))
                            }
                        }
                    }
                }

                @if !episode.transcript.is_empty() {
                    details.transcript {
                        summary { "Transcript" }
                        @for line in &episode.transcript {
                            p {
                                @if let Some(ts) = &line.timestamp {
                                    span.timecode { (ts) } " "
                                }
                                strong { (line.speaker) ": " }
                                (line.text)
                            }
                        }
                    }
                }

                a.back-link href=(HUB_HREF) { "Back to Savvy Hub" }
            }
        },
    )
}
