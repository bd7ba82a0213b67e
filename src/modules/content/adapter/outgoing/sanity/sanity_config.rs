use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
    pub use_cdn: bool,
    /// Connect timeout only; a slow response is never cut off.
    pub connect_timeout: Duration,
}

impl SanityConfig {
    pub const DEFAULT_DATASET: &'static str = "production";
    pub const DEFAULT_API_VERSION: &'static str = "2024-01-01";
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            dataset: Self::DEFAULT_DATASET.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: false,
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Query endpoint. The CDN host serves cached, token-less reads.
    pub fn query_endpoint(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.project_id, host, self.api_version, self.dataset
        )
    }

    pub fn image_base_url(&self) -> String {
        format!(
            "https://cdn.sanity.io/images/{}/{}",
            self.project_id, self.dataset
        )
    }
}
