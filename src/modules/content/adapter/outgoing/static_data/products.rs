use crate::modules::content::domain::documents::{Product, ProductStatus, Slug};

fn product(
    slug: &str,
    name: &str,
    tagline: &str,
    description: &str,
    category: &str,
    status: ProductStatus,
    features: Option<&[&str]>,
    tags: &[&str],
) -> Product {
    Product {
        id: format!("product-{slug}"),
        name: name.to_string(),
        slug: Slug::from(slug),
        tagline: Some(tagline.to_string()),
        description: description.to_string(),
        category: category.to_string(),
        status,
        features: features.map(|f| f.iter().map(|s| s.to_string()).collect()),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        url: None,
        image: None,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "onbrd",
            "Onbrd",
            "Employee onboarding that runs itself",
            "Role-aware onboarding plans, document collection and manager nudges.",
            "Productivity",
            ProductStatus::Live,
            Some(&["Smart checklists", "Document collection", "Manager nudges"]),
            &["hr", "saas"],
        ),
        product(
            "undr",
            "Undr",
            "Underwriting copilot for small lenders",
            "Reads statements, drafts credit memos and flags follow-up questions.",
            "AI",
            ProductStatus::Beta,
            Some(&["Statement parsing", "Memo drafts"]),
            &["fintech", "lending"],
        ),
        product(
            "trekker",
            "Trekker",
            "Group trips without the chaos",
            "Collects dates and budgets and proposes an itinerary everyone can vote on.",
            "Travel",
            ProductStatus::ComingSoon,
            None,
            &["consumer"],
        ),
        product(
            "scribe",
            "Scribe",
            "Meeting notes that write themselves",
            "Live transcription with action items pushed to your task tracker.",
            "AI",
            ProductStatus::Live,
            Some(&["Live transcript", "Action items", "Tracker sync"]),
            &["meetings", "transcription"],
        ),
        product(
            "pulse",
            "Pulse",
            "Team health in one weekly question",
            "A single pulse survey per week with trends leadership can act on.",
            "Productivity",
            ProductStatus::Beta,
            None,
            &["hr", "surveys"],
        ),
        product(
            "steady",
            "Steady",
            "Medication reminders for families",
            "Shared medication schedules with gentle reminders for caregivers.",
            "Health",
            ProductStatus::Beta,
            Some(&["Shared schedules", "Refill alerts"]),
            &["caregiving"],
        ),
        product(
            "ledgerly",
            "Ledgerly",
            "Bookkeeping for solo founders",
            "Categorises transactions and prepares quarterly summaries for your accountant.",
            "Finance",
            ProductStatus::Live,
            Some(&["Auto-categorisation", "Quarterly summaries"]),
            &["accounting", "ai"],
        ),
        product(
            "muse",
            "Muse",
            "Brand voice assistant",
            "Drafts copy in your brand's voice from a handful of examples.",
            "AI",
            ProductStatus::ComingSoon,
            None,
            &["marketing", "copywriting"],
        ),
    ]
}
