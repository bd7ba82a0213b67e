pub mod email_notifier;
pub mod tracing_notifier;

pub use email_notifier::EmailLeadNotifier;
pub use tracing_notifier::TracingLeadNotifier;
