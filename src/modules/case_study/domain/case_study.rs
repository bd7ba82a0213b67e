// src/modules/case_study/domain/case_study.rs

use serde::Serialize;

use crate::modules::content::domain::documents::{
    Feature, ImageRef, Metric, Project, Testimonial,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudySection {
    pub heading: String,
    pub body: String,
    pub image: Option<ImageRef>,
}

/// Read model for the case-study page. Every field comes from the project itself;
/// a section with no source data stays empty and is not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub challenge: Option<String>,
    pub approach: Vec<CaseStudySection>,
    pub solution: Vec<Feature>,
    pub results: Vec<Metric>,
    pub testimonials: Vec<Testimonial>,
    pub hero_image: Option<ImageRef>,
    pub gallery: Vec<ImageRef>,
    pub tags: Vec<String>,
    pub website: Option<String>,
}

impl CaseStudy {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn project_to_case_study(project: &Project) -> CaseStudy {
    let approach = project
        .chapters
        .iter()
        .map(|c| CaseStudySection {
            heading: c.title.clone(),
            body: c.body.clone(),
            image: c.image.clone(),
        })
        .collect();

    CaseStudy {
        title: project.title.clone(),
        slug: project.slug.current.clone(),
        summary: non_blank(&project.subtitle),
        challenge: non_blank(&project.description),
        approach,
        solution: project.features.clone().unwrap_or_default(),
        results: project.metrics.clone(),
        testimonials: project.testimonials.clone(),
        hero_image: project.hero_image.clone(),
        gallery: project.gallery.clone(),
        tags: project.tags.clone(),
        website: project.website.clone(),
    }
}
