pub mod case_study;
pub mod catalog;
pub mod content;
pub mod email;
pub mod lead_intake;
pub mod pages;
pub mod podcast;
