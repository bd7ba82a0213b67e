use crate::modules::content::domain::documents::{
    Chapter, Feature, ImageRef, Metric, PodcastEpisode, Product, ProductStatus, Project, Segment,
    Slug, Testimonial, Theme,
};

pub fn sample_lab_project(slug: &str) -> Project {
    Project {
        id: format!("lab-{slug}"),
        title: format!("Project {slug}"),
        subtitle: Some("A sample lab project".to_string()),
        slug: Slug::from(slug),
        description: Some("Built in the lab to test an idea quickly.".to_string()),
        hero_image: None,
        tags: vec!["SaaS".to_string()],
        theme: None,
        features: Some(vec![Feature {
            title: "Fast setup".to_string(),
            description: Some("Ready in minutes.".to_string()),
            icon: None,
        }]),
        testimonials: vec![],
        gallery: vec![],
        chapters: vec![],
        metrics: vec![],
        related_projects: vec![],
        website: None,
    }
}

pub fn sample_long_form_project(slug: &str) -> Project {
    Project {
        chapters: vec![
            Chapter {
                title: "The problem".to_string(),
                eyebrow: Some("01".to_string()),
                body: "Nobody could find clean water points.".to_string(),
                image: None,
            },
            Chapter {
                title: "The map".to_string(),
                eyebrow: Some("02".to_string()),
                body: "A shared map updated by field teams.".to_string(),
                image: None,
            },
        ],
        metrics: vec![Metric {
            label: "Water points mapped".to_string(),
            value: "1,200".to_string(),
        }],
        testimonials: vec![Testimonial {
            quote: "We finally know where to send trucks.".to_string(),
            author: "Ana Ruiz".to_string(),
            role: Some("Coordinator".to_string()),
            company: None,
        }],
        ..sample_lab_project(slug)
    }
}

pub fn sample_themed_project(slug: &str, logo_url: &str) -> Project {
    Project {
        theme: Some(Theme {
            primary_color: Some("#1F6FEB".to_string()),
            secondary_color: None,
            background_color: None,
            text_color: None,
            heading_font: None,
            body_font: None,
            logo: Some(ImageRef::from_url(logo_url, "Project logo")),
        }),
        ..sample_lab_project(slug)
    }
}

pub fn sample_podcast(slug: &str) -> PodcastEpisode {
    PodcastEpisode {
        id: format!("podcast-{slug}"),
        title: format!("Episode {slug}"),
        slug: Slug::from(slug),
        episode_number: 1,
        season_number: None,
        description: None,
        audio_url: format!("https://media.example.com/{slug}.mp3"),
        duration: Some("30:00".to_string()),
        cover_image: None,
        published_at: None,
        guests: vec![],
        segments: vec![
            Segment {
                timestamp: "00:00".to_string(),
                title: "Intro".to_string(),
                description: None,
            },
            Segment {
                timestamp: "04:32".to_string(),
                title: "Main topic".to_string(),
                description: None,
            },
        ],
        transcript: vec![],
    }
}

pub fn sample_product(slug: &str, category: &str, status: ProductStatus) -> Product {
    Product {
        id: format!("product-{slug}"),
        name: format!("Product {slug}"),
        slug: Slug::from(slug),
        tagline: None,
        description: "A sample product.".to_string(),
        category: category.to_string(),
        status,
        features: None,
        tags: vec![],
        url: None,
        image: None,
    }
}
