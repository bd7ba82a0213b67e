// Choices offered by the start-project form. `value` is what travels; `label` is shown.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const PROJECT_TYPES: &[Choice] = &[
    choice("web-app", "Web application"),
    choice("mobile-app", "Mobile app"),
    choice("mvp", "MVP for a new venture"),
    choice("ai-product", "AI product"),
    choice("design-system", "Brand & design system"),
    choice("other", "Something else"),
];

pub const BUDGET_RANGES: &[Choice] = &[
    choice("under-10k", "Under $10k"),
    choice("10k-25k", "$10k – $25k"),
    choice("25k-50k", "$25k – $50k"),
    choice("50k-100k", "$50k – $100k"),
    choice("100k-plus", "$100k+"),
];

pub const TIMELINES: &[Choice] = &[
    choice("asap", "As soon as possible"),
    choice("1-3-months", "1 – 3 months"),
    choice("3-6-months", "3 – 6 months"),
    choice("flexible", "Flexible"),
];

pub const GOALS: &[Choice] = &[
    choice("validate-idea", "Validate an idea"),
    choice("launch-mvp", "Launch an MVP"),
    choice("raise-funding", "Prepare for fundraising"),
    choice("scale-product", "Scale an existing product"),
    choice("redesign", "Redesign the experience"),
    choice("automate", "Automate operations"),
];

pub fn is_offered(choices: &[Choice], value: &str) -> bool {
    choices.iter().any(|c| c.value == value)
}

pub fn label_of(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.value == value).map(|c| c.label)
}
