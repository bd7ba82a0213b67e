// src/modules/lead_intake/domain/intake_form.rs

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::lead_intake::domain::options::{
    is_offered, Choice, BUDGET_RANGES, GOALS, PROJECT_TYPES, TIMELINES,
};

pub const MIN_DESCRIPTION_CHARS: usize = 10;

//
// ──────────────────────────────────────────────────────────
// Steps
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Welcome,
    Contact,
    ProjectType,
    BudgetTimeline,
    Description,
    Goals,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Welcome,
        Step::Contact,
        Step::ProjectType,
        Step::BudgetTimeline,
        Step::Description,
        Step::Goals,
    ];

    pub const LAST: Step = Step::Goals;

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Step> {
        Step::ALL.get(usize::from(index)).copied()
    }

    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Welcome => "Welcome",
            Step::Contact => "About you",
            Step::ProjectType => "Project type",
            Step::BudgetTimeline => "Budget & timeline",
            Step::Description => "Tell us more",
            Step::Goals => "Goals",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.index(), self.title())
    }
}

//
// ──────────────────────────────────────────────────────────
// Form data
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct IntakeData {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub company: Option<String>,
    #[schema(example = "mvp")]
    pub project_type: Option<String>,
    #[schema(example = "25k-50k")]
    pub budget: Option<String>,
    #[schema(example = "1-3-months")]
    pub timeline: Option<String>,
    #[schema(example = "A booking tool for independent physiotherapists.")]
    pub description: String,
    #[schema(example = json!(["launch-mvp"]))]
    pub goals: Vec<String>,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn selected(value: &Option<String>, choices: &[Choice]) -> bool {
    value.as_deref().is_some_and(|v| is_offered(choices, v))
}

impl IntakeData {
    pub fn is_step_valid(&self, step: Step) -> bool {
        match step {
            Step::Welcome => true,
            Step::Contact => {
                !self.name.trim().is_empty() && email_regex().is_match(&self.email)
            }
            Step::ProjectType => selected(&self.project_type, PROJECT_TYPES),
            Step::BudgetTimeline => {
                selected(&self.budget, BUDGET_RANGES) && selected(&self.timeline, TIMELINES)
            }
            Step::Description => self.description.chars().count() >= MIN_DESCRIPTION_CHARS,
            Step::Goals => {
                !self.goals.is_empty() && self.goals.iter().all(|g| is_offered(GOALS, g))
            }
        }
    }

    /// First step, in order, whose data is incomplete.
    pub fn first_invalid_step(&self) -> Option<Step> {
        Step::ALL.into_iter().find(|s| !self.is_step_valid(*s))
    }

    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|g| g == goal)
    }
}

//
// ──────────────────────────────────────────────────────────
// State machine
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Submission is only possible from the final step, form is at {0}")]
    NotAtFinalStep(Step),

    #[error("{0} is incomplete")]
    InvalidStep(Step),

    #[error("Form was already submitted")]
    AlreadySubmitted,
}

/// Linear six-step form. Navigation never skips a step, never leaves `0..=5`,
/// and refuses to advance past a step whose data is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    step: Step,
    submitted: bool,
    data: IntakeData,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a form from client-carried state.
    pub fn restore(step: Step, data: IntakeData) -> Self {
        Self {
            step,
            submitted: false,
            data,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn data(&self) -> &IntakeData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut IntakeData {
        &mut self.data
    }

    pub fn is_step_valid(&self) -> bool {
        self.data.is_step_valid(self.step)
    }

    /// Returns whether the step changed.
    pub fn next_step(&mut self) -> bool {
        if self.submitted || !self.is_step_valid() {
            return false;
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Returns whether the step changed.
    pub fn prev_step(&mut self) -> bool {
        if self.submitted {
            return false;
        }

        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Adds the goal when absent, removes it when present. Goals not on offer are
    /// ignored. Returns whether the goal is selected afterwards.
    pub fn toggle_goal(&mut self, goal: &str) -> bool {
        if self.submitted || !is_offered(GOALS, goal) {
            return self.data.has_goal(goal);
        }

        if let Some(pos) = self.data.goals.iter().position(|g| g == goal) {
            self.data.goals.remove(pos);
            false
        } else {
            self.data.goals.push(goal.to_string());
            true
        }
    }

    pub fn submit(&mut self) -> Result<IntakeData, IntakeError> {
        if self.submitted {
            return Err(IntakeError::AlreadySubmitted);
        }

        if self.step != Step::LAST {
            return Err(IntakeError::NotAtFinalStep(self.step));
        }

        if let Some(step) = self.data.first_invalid_step() {
            return Err(IntakeError::InvalidStep(step));
        }

        self.submitted = true;
        Ok(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_data() -> IntakeData {
        IntakeData {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            project_type: Some("mvp".to_string()),
            budget: Some("25k-50k".to_string()),
            timeline: Some("flexible".to_string()),
            description: "A booking tool for physios.".to_string(),
            goals: vec!["launch-mvp".to_string()],
        }
    }

    fn form_at(step: Step, data: IntakeData) -> IntakeForm {
        IntakeForm::restore(step, data)
    }

    /* --------------------------------------------------
     * Step guard
     * -------------------------------------------------- */

    #[test]
    fn welcome_is_always_valid() {
        assert!(IntakeForm::new().is_step_valid());
    }

    #[test]
    fn contact_step_requires_name_and_email() {
        let mut data = IntakeData {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            ..IntakeData::default()
        };
        assert!(!data.is_step_valid(Step::Contact));

        data.email = "a@b.co".to_string();
        assert!(data.is_step_valid(Step::Contact));

        data.name = "   ".to_string();
        assert!(!data.is_step_valid(Step::Contact));
    }

    #[test]
    fn contact_email_rejects_whitespace_and_missing_parts() {
        for email in ["a b@c.co", "a@b", "@b.co", "a@.co", "a@@b.co", "", " a@b.co", "a@b.co "] {
            let data = IntakeData {
                name: "Ada".to_string(),
                email: email.to_string(),
                ..IntakeData::default()
            };
            assert!(!data.is_step_valid(Step::Contact), "{email:?} accepted");
        }
    }

    #[test]
    fn project_type_must_be_an_offered_choice() {
        let mut data = IntakeData::default();
        assert!(!data.is_step_valid(Step::ProjectType));

        data.project_type = Some("spaceship".to_string());
        assert!(!data.is_step_valid(Step::ProjectType));

        data.project_type = Some("web-app".to_string());
        assert!(data.is_step_valid(Step::ProjectType));
    }

    #[test]
    fn budget_step_needs_budget_and_timeline() {
        let mut data = IntakeData {
            budget: Some("under-10k".to_string()),
            ..IntakeData::default()
        };
        assert!(!data.is_step_valid(Step::BudgetTimeline));

        data.timeline = Some("asap".to_string());
        assert!(data.is_step_valid(Step::BudgetTimeline));
    }

    #[test]
    fn description_needs_ten_characters() {
        let mut data = IntakeData {
            description: "Short".to_string(),
            ..IntakeData::default()
        };
        assert!(!data.is_step_valid(Step::Description));

        data.description = "Ten chars!".to_string();
        assert_eq!(data.description.chars().count(), 10);
        assert!(data.is_step_valid(Step::Description));

        // counted as entered, surrounding spaces included
        data.description = "  abcdefgh  ".to_string();
        assert!(data.is_step_valid(Step::Description));

        data.description = "  abcde  ".to_string();
        assert!(!data.is_step_valid(Step::Description));
    }

    #[test]
    fn goals_step_needs_one_goal() {
        let mut data = IntakeData::default();
        assert!(!data.is_step_valid(Step::Goals));

        data.goals.push("automate".to_string());
        assert!(data.is_step_valid(Step::Goals));
    }

    #[test]
    fn goals_step_rejects_goals_not_on_offer() {
        let mut data = IntakeData {
            goals: vec!["world-domination".to_string()],
            ..IntakeData::default()
        };
        assert!(!data.is_step_valid(Step::Goals));

        data.goals.insert(0, "automate".to_string());
        assert!(!data.is_step_valid(Step::Goals));
    }

    /* --------------------------------------------------
     * Navigation
     * -------------------------------------------------- */

    #[test]
    fn next_step_advances_only_when_valid() {
        let mut form = IntakeForm::new();
        assert!(form.next_step());
        assert_eq!(form.step(), Step::Contact);

        // contact data missing
        let before = form.clone();
        assert!(!form.next_step());
        assert_eq!(form, before);

        form.data_mut().name = "Ada".to_string();
        form.data_mut().email = "a@b.co".to_string();
        assert!(form.next_step());
        assert_eq!(form.step(), Step::ProjectType);
    }

    #[test]
    fn next_step_never_passes_last_step() {
        let mut form = form_at(Step::Goals, complete_data());
        assert!(!form.next_step());
        assert_eq!(form.step(), Step::Goals);
    }

    #[test]
    fn prev_step_never_goes_below_welcome() {
        let mut form = form_at(Step::Contact, IntakeData::default());
        assert!(form.prev_step());
        assert_eq!(form.step(), Step::Welcome);
        assert!(!form.prev_step());
        assert_eq!(form.step(), Step::Welcome);
    }

    #[test]
    fn prev_step_ignores_validity() {
        let mut form = form_at(Step::Description, IntakeData::default());
        assert!(form.prev_step());
        assert_eq!(form.step(), Step::BudgetTimeline);
    }

    #[test]
    fn walks_all_steps_with_complete_data() {
        let mut form = form_at(Step::Welcome, complete_data());
        for expected in &Step::ALL[1..] {
            assert!(form.next_step());
            assert_eq!(form.step(), *expected);
        }
    }

    #[test]
    fn step_index_round_trips() {
        for step in Step::ALL {
            assert_eq!(Step::from_index(step.index()), Some(step));
        }
        assert_eq!(Step::from_index(6), None);
    }

    /* --------------------------------------------------
     * Goals
     * -------------------------------------------------- */

    #[test]
    fn toggling_a_goal_twice_restores_goals() {
        let mut form = form_at(Step::Goals, complete_data());
        let original = form.data().goals.clone();

        assert!(form.toggle_goal("redesign"));
        assert!(!form.toggle_goal("redesign"));
        assert_eq!(form.data().goals, original);

        assert!(!form.toggle_goal("launch-mvp"));
        assert!(form.toggle_goal("launch-mvp"));
        assert_eq!(form.data().goals, original);
    }

    #[test]
    fn unknown_goal_is_ignored() {
        let mut form = form_at(Step::Goals, IntakeData::default());
        assert!(!form.toggle_goal("world-domination"));
        assert!(form.data().goals.is_empty());
    }

    /* --------------------------------------------------
     * Submit
     * -------------------------------------------------- */

    #[test]
    fn submit_from_last_step_with_complete_data() {
        let mut form = form_at(Step::Goals, complete_data());

        let payload = form.submit().unwrap();

        assert!(form.is_submitted());
        assert_eq!(payload, complete_data());
    }

    #[test]
    fn submit_requires_last_step() {
        let mut form = form_at(Step::Description, complete_data());

        assert_eq!(
            form.submit(),
            Err(IntakeError::NotAtFinalStep(Step::Description))
        );
        assert!(!form.is_submitted());
    }

    #[test]
    fn submit_reports_first_invalid_step() {
        let data = IntakeData {
            budget: None,
            description: "tiny".to_string(),
            ..complete_data()
        };
        let mut form = form_at(Step::Goals, data);

        assert_eq!(
            form.submit(),
            Err(IntakeError::InvalidStep(Step::BudgetTimeline))
        );
    }

    #[test]
    fn submitted_form_is_frozen() {
        let mut form = form_at(Step::Goals, complete_data());
        form.submit().unwrap();

        assert_eq!(form.submit(), Err(IntakeError::AlreadySubmitted));
        assert!(!form.prev_step());
        assert!(form.toggle_goal("launch-mvp"));
        assert_eq!(form.data().goals, vec!["launch-mvp".to_string()]);
    }
}
