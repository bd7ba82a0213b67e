pub mod intake_form;
pub mod options;

pub use intake_form::{IntakeData, IntakeError, IntakeForm, Step};
pub use options::{Choice, BUDGET_RANGES, GOALS, PROJECT_TYPES, TIMELINES};
