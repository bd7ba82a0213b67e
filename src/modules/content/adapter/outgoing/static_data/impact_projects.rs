use crate::modules::content::domain::documents::{
    Chapter, Feature, ImageRef, Metric, Project, Reference, Slug, Testimonial,
};

pub fn impact_projects() -> Vec<Project> {
    vec![
        Project {
            id: "impact-clean-water-map".to_string(),
            title: "Clean Water Map".to_string(),
            subtitle: Some("Mapping safe water points with community reporters".to_string()),
            slug: Slug::from("clean-water-map"),
            description: Some(
                "A field app and public map that lets volunteers report the status of water \
                 points, so repair crews go where they are needed first."
                    .to_string(),
            ),
            hero_image: Some(ImageRef::from_url(
                "/images/impact/clean-water-map/hero.jpg",
                "Volunteer reporting a water point",
            )),
            tags: vec!["Civic".to_string(), "Mobile".to_string()],
            theme: None,
            features: Some(vec![
                Feature {
                    title: "Offline reporting".to_string(),
                    description: Some("Reports queue on the phone until a signal returns.".to_string()),
                    icon: Some("wifi-off".to_string()),
                },
                Feature {
                    title: "Repair routing".to_string(),
                    description: Some("Crews get a daily route ordered by urgency.".to_string()),
                    icon: Some("route".to_string()),
                },
            ]),
            testimonials: vec![Testimonial {
                quote: "For the first time we know which pumps are down before people walk to them."
                    .to_string(),
                author: "Amina Okafor".to_string(),
                role: Some("Program Lead".to_string()),
                company: Some("WaterBridge".to_string()),
            }],
            gallery: vec![],
            chapters: vec![
                Chapter {
                    title: "Walking to a broken pump".to_string(),
                    eyebrow: Some("The problem".to_string()),
                    body: "Families walked an hour to a water point only to find it broken."
                        .to_string(),
                    image: None,
                },
                Chapter {
                    title: "Reporters, not sensors".to_string(),
                    eyebrow: Some("The approach".to_string()),
                    body: "Instead of hardware we trained local reporters and gave them a \
                           three-tap app."
                        .to_string(),
                    image: None,
                },
            ],
            metrics: vec![
                Metric {
                    label: "Water points mapped".to_string(),
                    value: "3,200".to_string(),
                },
                Metric {
                    label: "Median repair time".to_string(),
                    value: "4 days".to_string(),
                },
            ],
            related_projects: vec![Reference {
                reference: "impact-food-bank-routing".to_string(),
            }],
            website: None,
        },
        Project {
            id: "impact-food-bank-routing".to_string(),
            title: "Food Bank Routing".to_string(),
            subtitle: Some("Getting surplus food to pantries the same day".to_string()),
            slug: Slug::from("food-bank-routing"),
            description: Some(
                "A dispatch tool that matches grocery surplus to pantry demand and routes \
                 volunteer drivers."
                    .to_string(),
            ),
            hero_image: Some(ImageRef::from_url(
                "/images/impact/food-bank-routing/hero.jpg",
                "Volunteer loading a van",
            )),
            tags: vec!["Logistics".to_string()],
            theme: None,
            features: None,
            testimonials: vec![],
            gallery: vec![],
            chapters: vec![],
            metrics: vec![],
            related_projects: vec![],
            website: None,
        },
    ]
}
