use chrono::{TimeZone, Utc};

use crate::modules::content::domain::documents::{
    AgendaItem, BlogPost, ContentBlock, Event, EventFormat, EventLocation, EventStatus, ImageRef,
    NavLink, Reference, SiteSettings, Slug, SocialLink, Span, TeamMember, TextBlock, Venture,
};

fn nav(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

pub fn site_settings() -> SiteSettings {
    SiteSettings {
        id: "siteSettings".to_string(),
        title: "Savvy".to_string(),
        description: Some("A digital product studio for ventures, labs and impact.".to_string()),
        logo: Some(ImageRef::from_url("/static/savvy-logo.svg", "Savvy")),
        navigation: vec![
            nav("Hub", "/savvy-hub"),
            nav("Impact", "/savvy-impact"),
            nav("Lab", "/savvy-lab"),
            nav("Start a project", "/start-project"),
        ],
        social_links: vec![SocialLink {
            platform: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/company/savvy-studio".to_string(),
        }],
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "team-lena-brooks".to_string(),
            name: "Lena Brooks".to_string(),
            slug: Slug::from("lena-brooks"),
            role: "Managing Partner".to_string(),
            photo: None,
            bio: Some("Leads venture building and the studio's lab.".to_string()),
            socials: vec![],
            order: Some(1),
        },
        TeamMember {
            id: "team-omar-haddad".to_string(),
            name: "Omar Haddad".to_string(),
            slug: Slug::from("omar-haddad"),
            role: "Engineering Lead".to_string(),
            photo: None,
            bio: None,
            socials: vec![],
            order: Some(2),
        },
    ]
}

pub fn ventures() -> Vec<Venture> {
    vec![Venture {
        id: "venture-ledgerly".to_string(),
        name: "Ledgerly".to_string(),
        slug: Slug::from("ledgerly"),
        summary: Some("Bookkeeping for solo founders, spun out of the lab in 2023.".to_string()),
        stage: Some("launched".to_string()),
        website: None,
        logo: None,
        founded_year: Some(2023),
    }]
}

pub fn events() -> Vec<Event> {
    vec![Event {
        id: "event-demo-day-2025".to_string(),
        title: "Lab Demo Day".to_string(),
        slug: Slug::from("demo-day-2025"),
        event_type: "demo-day".to_string(),
        status: EventStatus::Upcoming,
        format: EventFormat::Hybrid,
        date_time: Utc
            .with_ymd_and_hms(2025, 6, 12, 17, 0, 0)
            .single()
            .unwrap_or_default(),
        end_date_time: None,
        location: Some(EventLocation {
            venue: Some("Savvy Studio".to_string()),
            address: None,
            city: Some("Lisbon".to_string()),
        }),
        online_url: Some("https://live.savvy.studio/demo-day".to_string()),
        registration_url: None,
        recording_url: None,
        cancellation_reason: None,
        description: Some("Five lab teams demo what they shipped this cohort.".to_string()),
        speakers: vec![],
        agenda: vec![
            AgendaItem {
                time: "17:00".to_string(),
                title: "Doors open".to_string(),
                speaker: None,
            },
            AgendaItem {
                time: "17:30".to_string(),
                title: "Demos".to_string(),
                speaker: Some("Lena Brooks".to_string()),
            },
        ],
    }]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![BlogPost {
        id: "post-why-we-build-labs".to_string(),
        title: "Why we build our own products".to_string(),
        slug: Slug::from("why-we-build-labs"),
        authors: vec![Reference {
            reference: "team-lena-brooks".to_string(),
        }],
        main_image: None,
        excerpt: Some("Client work pays the bills; lab work keeps us honest.".to_string()),
        content: vec![ContentBlock::Text(TextBlock {
            style: Some("normal".to_string()),
            children: vec![Span {
                text: "Every lab product starts with a problem one of us had last month."
                    .to_string(),
                marks: vec![],
            }],
        })],
        categories: vec!["Studio".to_string()],
        seo: None,
        published_at: Utc.with_ymd_and_hms(2024, 11, 2, 9, 0, 0).single(),
    }]
}
