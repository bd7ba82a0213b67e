use actix_web::http::StatusCode;
use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::{debug, error, info};

use super::page;
use crate::modules::lead_intake::application::ports::incoming::use_cases::SubmitLeadError;
use crate::modules::lead_intake::domain::options::is_offered;
use crate::modules::lead_intake::domain::{IntakeData, IntakeForm, Step, GOALS};
use crate::modules::pages::adapter::incoming::web::views::start_project::{
    start_project_page, thank_you_page,
};
use crate::shared::html::html_response;
use crate::AppState;

const DELIVERY_FAILED: &str =
    "We couldn't send your enquiry just now. Nothing was lost, please try again in a moment.";

/// Everything the form posts back. The whole state travels with each request;
/// nothing is kept on the server between steps.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StartProjectForm {
    /// Step index as posted; anything other than `0`..=`5` restarts the form.
    pub step: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
    /// Comma-separated goal values.
    pub goals: String,
    pub action: Option<String>,
    pub toggle_goal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormAction {
    Next,
    Back,
    ToggleGoal(String),
    Submit,
    Stay,
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl StartProjectForm {
    fn action(&self) -> FormAction {
        if let Some(goal) = &self.toggle_goal {
            return FormAction::ToggleGoal(goal.clone());
        }

        match self.action.as_deref() {
            Some("next") => FormAction::Next,
            Some("back") => FormAction::Back,
            Some("submit") => FormAction::Submit,
            _ => FormAction::Stay,
        }
    }

    /// Out-of-range steps restart the form; goals not on offer are dropped.
    fn into_form(self) -> IntakeForm {
        let step = self
            .step
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Step::from_index)
            .unwrap_or_default();

        let goals = self
            .goals
            .split(',')
            .map(str::trim)
            .filter(|g| is_offered(GOALS, g))
            .fold(Vec::<String>::new(), |mut acc, g| {
                if !acc.iter().any(|x| x == g) {
                    acc.push(g.to_string());
                }
                acc
            });

        let data = IntakeData {
            name: self.name,
            email: self.email,
            company: optional(self.company),
            project_type: optional(self.project_type),
            budget: optional(self.budget),
            timeline: optional(self.timeline),
            description: self.description,
            goals,
        };

        IntakeForm::restore(step, data)
    }
}

#[get("/start-project")]
pub async fn start_project_page_handler(data: web::Data<AppState>) -> impl Responder {
    page(start_project_page(&data.chrome, &IntakeForm::new(), None))
}

#[post("/start-project")]
pub async fn start_project_action_handler(
    body: web::Form<StartProjectForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let action = body.action();
    let mut form = body.into_form();

    match action {
        FormAction::Next => {
            if !form.next_step() {
                debug!("Staying on {}: step is incomplete", form.step());
            }
        }
        FormAction::Back => {
            form.prev_step();
        }
        FormAction::ToggleGoal(goal) => {
            form.toggle_goal(&goal);
        }
        FormAction::Stay => {}
        FormAction::Submit => {
            let before = form.clone();

            let lead = match form.submit() {
                Ok(lead) => lead,
                Err(e) => {
                    debug!("Submission refused: {}", e);
                    return page(start_project_page(&data.chrome, &before, None));
                }
            };

            return match data.lead_intake.submit.execute(lead.clone()).await {
                Ok(receipt) => {
                    info!("Enquiry {} accepted", receipt.reference);
                    page(thank_you_page(&data.chrome, &lead, &receipt))
                }

                Err(SubmitLeadError::InvalidStep(step)) => {
                    debug!("Lead rejected at {}", step);
                    page(start_project_page(&data.chrome, &before, None))
                }

                Err(SubmitLeadError::NotificationFailed(msg)) => {
                    error!("Failed to deliver enquiry: {}", msg);
                    html_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        start_project_page(&data.chrome, &before, Some(DELIVERY_FAILED)),
                    )
                }
            };
        }
    }

    page(start_project_page(&data.chrome, &form, None))
}
