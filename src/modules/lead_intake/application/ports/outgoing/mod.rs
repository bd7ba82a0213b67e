pub mod lead_notifier;

pub use lead_notifier::{LeadNotification, LeadNotifier, LeadNotifierError};
