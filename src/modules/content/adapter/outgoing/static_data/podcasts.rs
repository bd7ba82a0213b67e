use chrono::{TimeZone, Utc};

use crate::modules::content::domain::documents::{
    Guest, ImageRef, PodcastEpisode, Segment, Slug, TranscriptLine,
};

fn segment(timestamp: &str, title: &str) -> Segment {
    Segment {
        timestamp: timestamp.to_string(),
        title: title.to_string(),
        description: None,
    }
}

fn line(timestamp: &str, speaker: &str, text: &str) -> TranscriptLine {
    TranscriptLine {
        timestamp: Some(timestamp.to_string()),
        speaker: speaker.to_string(),
        text: text.to_string(),
    }
}

pub fn podcast_episodes() -> Vec<PodcastEpisode> {
    vec![
        PodcastEpisode {
            id: "podcast-building-in-public".to_string(),
            title: "Building in Public".to_string(),
            slug: Slug::from("building-in-public"),
            episode_number: 1,
            season_number: Some(1),
            description: Some(
                "Why we share roadmaps, revenue and mistakes while the product is still rough."
                    .to_string(),
            ),
            audio_url: "https://media.savvy.studio/podcast/s1e1.mp3".to_string(),
            duration: Some("38:12".to_string()),
            cover_image: Some(ImageRef::from_url(
                "/images/podcast/s1e1.jpg",
                "Building in Public cover",
            )),
            published_at: Utc.with_ymd_and_hms(2024, 9, 12, 8, 0, 0).single(),
            guests: vec![Guest {
                name: "Jonas Feld".to_string(),
                role: Some("Founder".to_string()),
                company: Some("Ledgerly".to_string()),
                photo: None,
            }],
            segments: vec![
                segment("00:00", "Intro"),
                segment("04:32", "The first public roadmap"),
                segment("12:10", "Sharing revenue numbers"),
                segment("27:45", "When it backfires"),
            ],
            transcript: vec![
                line("00:00", "Host", "Welcome to the Savvy Hub podcast."),
                line("04:32", "Jonas Feld", "Our first public roadmap was a Notion page."),
            ],
        },
        PodcastEpisode {
            id: "podcast-designing-for-trust".to_string(),
            title: "Designing for Trust".to_string(),
            slug: Slug::from("designing-for-trust"),
            episode_number: 2,
            season_number: Some(1),
            description: Some(
                "How fintech and health products earn trust before asking for data."
                    .to_string(),
            ),
            audio_url: "https://media.savvy.studio/podcast/s1e2.mp3".to_string(),
            duration: Some("1:02:40".to_string()),
            cover_image: None,
            published_at: Utc.with_ymd_and_hms(2024, 10, 3, 8, 0, 0).single(),
            guests: vec![
                Guest {
                    name: "Mara Lindqvist".to_string(),
                    role: Some("Design Director".to_string()),
                    company: Some("Steady".to_string()),
                    photo: None,
                },
                Guest {
                    name: "Tomás Vidal".to_string(),
                    role: Some("Head of Risk".to_string()),
                    company: None,
                    photo: None,
                },
            ],
            segments: vec![
                segment("00:00", "Intro"),
                segment("09:15", "Permissions as conversation"),
                segment("1:01:30", "Lightning round"),
            ],
            transcript: vec![],
        },
    ]
}
