use crate::modules::content::domain::documents::{
    Chapter, Feature, ImageRef, Metric, Project, Slug, Testimonial, Theme,
};

fn feature(title: &str, description: &str, icon: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: Some(description.to_string()),
        icon: Some(icon.to_string()),
    }
}

fn theme(primary: &str, background: &str, logo: &str) -> Theme {
    Theme {
        primary_color: Some(primary.to_string()),
        secondary_color: None,
        background_color: Some(background.to_string()),
        text_color: Some("#111111".to_string()),
        heading_font: Some("Space Grotesk".to_string()),
        body_font: Some("Inter".to_string()),
        logo: Some(ImageRef::from_url(logo, "logo")),
    }
}

pub fn lab_projects() -> Vec<Project> {
    vec![onbrd(), undr(), trekker()]
}

fn onbrd() -> Project {
    Project {
        id: "lab-onbrd".to_string(),
        title: "Onbrd".to_string(),
        subtitle: Some("Employee onboarding that runs itself".to_string()),
        slug: Slug::from("onbrd"),
        description: Some(
            "Onbrd turns a new hire's first 90 days into a guided checklist that HR, IT and \
             managers share. Tasks route themselves, documents collect themselves, and nobody \
             starts Monday without a laptop."
                .to_string(),
        ),
        hero_image: Some(ImageRef::from_url(
            "/images/lab/onbrd/hero.png",
            "Onbrd dashboard",
        )),
        tags: vec!["HR".to_string(), "SaaS".to_string(), "AI".to_string()],
        theme: Some(theme("#5B5BF7", "#F4F4FF", "/images/lab/onbrd/logo.svg")),
        features: Some(vec![
            feature(
                "Smart checklists",
                "Role-aware onboarding plans generated from the job description.",
                "checklist",
            ),
            feature(
                "Document collection",
                "Contracts, tax forms and IDs gathered and verified before day one.",
                "file",
            ),
            feature(
                "Manager nudges",
                "Gentle reminders so 1:1s and intros actually happen.",
                "bell",
            ),
        ]),
        testimonials: vec![Testimonial {
            quote: "We cut onboarding admin by more than half in the first quarter.".to_string(),
            author: "Priya Raman".to_string(),
            role: Some("Head of People".to_string()),
            company: Some("Northwind".to_string()),
        }],
        gallery: vec![
            ImageRef::from_url("/images/lab/onbrd/gallery-1.png", "Checklist view"),
            ImageRef::from_url("/images/lab/onbrd/gallery-2.png", "Document inbox"),
        ],
        chapters: vec![],
        metrics: vec![
            Metric {
                label: "Teams onboarded".to_string(),
                value: "140+".to_string(),
            },
            Metric {
                label: "Admin time saved".to_string(),
                value: "54%".to_string(),
            },
        ],
        related_projects: vec![],
        website: Some("https://onbrd.app".to_string()),
    }
}

fn undr() -> Project {
    Project {
        id: "lab-undr".to_string(),
        title: "Undr".to_string(),
        subtitle: Some("An underwriting copilot for small lenders".to_string()),
        slug: Slug::from("undr"),
        description: Some(
            "Undr reads bank statements and financials, drafts a credit memo, and flags the \
             three questions an underwriter should ask next."
                .to_string(),
        ),
        hero_image: Some(ImageRef::from_url(
            "/images/lab/undr/hero.png",
            "Undr credit memo",
        )),
        tags: vec!["Fintech".to_string(), "AI".to_string()],
        theme: Some(theme("#0E7C66", "#EEF8F5", "/images/lab/undr/logo.svg")),
        features: Some(vec![
            feature(
                "Statement parsing",
                "Twelve months of statements reconciled in seconds.",
                "table",
            ),
            feature(
                "Memo drafts",
                "A first-draft credit memo in the lender's own template.",
                "pen",
            ),
        ]),
        testimonials: vec![],
        gallery: vec![],
        chapters: vec![
            Chapter {
                title: "The backlog".to_string(),
                eyebrow: Some("Chapter 1".to_string()),
                body: "Community lenders told us the same story: applications were not the \
                       bottleneck, reading them was."
                    .to_string(),
                image: Some(ImageRef::from_url(
                    "/images/lab/undr/chapter-1.png",
                    "Stack of applications",
                )),
            },
            Chapter {
                title: "Reading like an underwriter".to_string(),
                eyebrow: Some("Chapter 2".to_string()),
                body: "We shadowed six underwriters for two weeks and encoded the checks they \
                       run before anything else."
                    .to_string(),
                image: None,
            },
            Chapter {
                title: "Keeping humans in charge".to_string(),
                eyebrow: Some("Chapter 3".to_string()),
                body: "Undr never approves or declines. It drafts, highlights and asks."
                    .to_string(),
                image: None,
            },
        ],
        metrics: vec![],
        related_projects: vec![],
        website: None,
    }
}

fn trekker() -> Project {
    Project {
        id: "lab-trekker".to_string(),
        title: "Trekker".to_string(),
        subtitle: Some("Group trips without the group chat chaos".to_string()),
        slug: Slug::from("trekker"),
        description: Some(
            "Trekker collects everyone's dates, budgets and must-dos and proposes an itinerary \
             the whole group can vote on."
                .to_string(),
        ),
        hero_image: Some(ImageRef::from_url(
            "/images/lab/trekker/hero.png",
            "Trekker itinerary",
        )),
        tags: vec!["Travel".to_string(), "Consumer".to_string()],
        theme: None,
        features: None,
        testimonials: vec![],
        gallery: vec![ImageRef::from_url(
            "/images/lab/trekker/gallery-1.png",
            "Voting on activities",
        )],
        chapters: vec![],
        metrics: vec![],
        related_projects: vec![],
        website: None,
    }
}
