pub mod case_study;

pub use case_study::{project_to_case_study, CaseStudy, CaseStudySection};
