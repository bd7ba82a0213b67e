use maud::{html, Markup};

use crate::modules::lead_intake::application::ports::incoming::use_cases::LeadReceipt;
use crate::modules::lead_intake::domain::{
    Choice, IntakeData, IntakeForm, Step, BUDGET_RANGES, GOALS, PROJECT_TYPES, TIMELINES,
};
use crate::shared::html::{base_document, SiteChrome};

pub const START_PROJECT_HREF: &str = "/start-project";

/// Goals travel between requests as one comma-separated hidden field.
pub fn encode_goals(goals: &[String]) -> String {
    goals.join(",")
}

fn hidden(name: &str, value: &str) -> Markup {
    html! { input type="hidden" name=(name) value=(value); }
}

/// Carries every field the current step does not show.
fn carried_fields(step: Step, data: &IntakeData) -> Markup {
    html! {
        input type="hidden" name="step" value=(step.index());
        @if step != Step::Contact {
            (hidden("name", &data.name))
            (hidden("email", &data.email))
            (hidden("company", data.company.as_deref().unwrap_or("")))
        }
        @if step != Step::ProjectType {
            (hidden("project_type", data.project_type.as_deref().unwrap_or("")))
        }
        @if step != Step::BudgetTimeline {
            (hidden("budget", data.budget.as_deref().unwrap_or("")))
            (hidden("timeline", data.timeline.as_deref().unwrap_or("")))
        }
        @if step != Step::Description {
            (hidden("description", &data.description))
        }
        (hidden("goals", &encode_goals(&data.goals)))
    }
}

fn radio_group(name: &str, legend: &str, choices: &[Choice], current: Option<&str>) -> Markup {
    html! {
        fieldset.choices {
            legend { (legend) }
            @for c in choices {
                label.choice {
                    input type="radio" name=(name) value=(c.value) checked[current == Some(c.value)];
                    " " (c.label)
                }
            }
        }
    }
}

fn step_fields(step: Step, data: &IntakeData) -> Markup {
    match step {
        Step::Welcome => html! {
            p { "Tell us about what you want to build. It takes about two minutes." }
        },
        Step::Contact => html! {
            label { "Name" input type="text" name="name" value=(data.name) autocomplete="name"; }
            label { "Email" input type="email" name="email" value=(data.email) autocomplete="email"; }
            label {
                "Company (optional)"
                input type="text" name="company" value=(data.company.as_deref().unwrap_or("")) autocomplete="organization";
            }
        },
        Step::ProjectType => radio_group(
            "project_type",
            "What are we building?",
            PROJECT_TYPES,
            data.project_type.as_deref(),
        ),
        Step::BudgetTimeline => html! {
            (radio_group("budget", "Budget", BUDGET_RANGES, data.budget.as_deref()))
            (radio_group("timeline", "Timeline", TIMELINES, data.timeline.as_deref()))
        },
        Step::Description => html! {
            label {
                "Describe your project"
                textarea name="description" rows="6" { (data.description) }
            }
        },
        Step::Goals => html! {
            fieldset.goals {
                legend { "What should this project achieve?" }
                @for g in GOALS {
                    @let selected = data.has_goal(g.value);
                    button.goal type="submit" name="toggle_goal" value=(g.value)
                        aria-pressed=(if selected { "true" } else { "false" }) {
                        (g.label)
                    }
                }
            }
        },
    }
}

fn progress(step: Step) -> Markup {
    html! {
        ol.form-progress {
            @for s in Step::ALL {
                li aria-current=[(s == step).then_some("step")] { (s.title()) }
            }
        }
    }
}

/// The primary control stays submittable; an invalid step is only marked as such and
/// the server leaves the state unchanged.
fn controls(form: &IntakeForm) -> Markup {
    let step = form.step();
    let valid = form.is_step_valid();
    let (action, label) = if step == Step::LAST {
        ("submit", "Send enquiry")
    } else {
        ("next", "Continue")
    };

    html! {
        div.form-controls {
            @if step.prev().is_some() {
                button.back type="submit" name="action" value="back" { "Back" }
            }
            button.primary type="submit" name="action" value=(action)
                aria-disabled=[(!valid).then_some("true")]
                data-valid=(if valid { "true" } else { "false" }) {
                (label)
            }
        }
    }
}

pub fn start_project_page(chrome: &SiteChrome, form: &IntakeForm, notice: Option<&str>) -> Markup {
    let step = form.step();

    base_document(
        chrome,
        "Start a project",
        html! {
            section.start-project {
                h1 { "Start a project" }
                (progress(step))
                @if let Some(notice) = notice {
                    p.notice role="alert" { (notice) }
                }
                form method="post" action=(START_PROJECT_HREF) data-step=(step.index()) {
                    h2 { "Step " (step.index() + 1) " of " (Step::ALL.len()) ": " (step.title()) }
                    (carried_fields(step, form.data()))
                    (step_fields(step, form.data()))
                    (controls(form))
                }
            }
        },
    )
}

pub fn thank_you_page(chrome: &SiteChrome, data: &IntakeData, receipt: &LeadReceipt) -> Markup {
    base_document(
        chrome,
        "Thank you",
        html! {
            section.thank-you {
                h1 { "Thanks, " (data.name.trim()) "!" }
                p { "We've received your enquiry and will reply to " (data.email.trim()) " within two working days." }
                p.reference { "Reference " (receipt.reference.to_string()) }
            }
        },
    )
}
