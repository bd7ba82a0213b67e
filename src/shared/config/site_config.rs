use std::env;
use std::str::FromStr;

use email_address::EmailAddress;

use crate::modules::content::adapter::outgoing::SanityConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Everything served from the documents bundled with the binary.
    Static,
    /// Lab projects and products stay bundled, the rest comes from the hosted store.
    Sanity,
}

impl FromStr for ContentSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(ContentSource::Static),
            "sanity" => Ok(ContentSource::Sanity),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    Relay {
        server: String,
        username: String,
        password: String,
    },
    Local {
        host: String,
        port: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmailConfig {
    pub inbox: String,
    pub from_email: String,
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub rust_env: String,
    pub content_source: ContentSource,
    pub sanity: Option<SanityConfig>,
    /// `None` means enquiries are only logged.
    pub lead_email: Option<LeadEmailConfig>,
    pub site_logo: Option<String>,
}

impl SiteConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_SMTP_HOST: &'static str = "localhost";
    pub const DEFAULT_SMTP_PORT: u16 = 1025;

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = parse_or("PORT", get("PORT"), Self::DEFAULT_PORT)?;
        let rust_env = get("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let content_source = match get("CONTENT_SOURCE") {
            Some(raw) => raw.parse::<ContentSource>().map_err(|_| ConfigError::Invalid {
                key: "CONTENT_SOURCE",
                value: raw,
            })?,
            None if get("SANITY_PROJECT_ID").is_some() => ContentSource::Sanity,
            None => ContentSource::Static,
        };

        let sanity = match content_source {
            ContentSource::Static => None,
            ContentSource::Sanity => Some(sanity_from(&get)?),
        };

        let lead_email = match get("LEAD_NOTIFY_EMAIL") {
            Some(inbox) => Some(lead_email_from(inbox, &get)?),
            None => None,
        };

        Ok(Self {
            host,
            port,
            rust_env,
            content_source,
            sanity,
            lead_email,
            site_logo: get("SITE_LOGO"),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn sanity_from<G>(get: &G) -> Result<SanityConfig, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let project_id = get("SANITY_PROJECT_ID").ok_or(ConfigError::Missing("SANITY_PROJECT_ID"))?;

    let mut config = SanityConfig::new(&project_id);
    if let Some(dataset) = get("SANITY_DATASET") {
        config.dataset = dataset;
    }
    if let Some(version) = get("SANITY_API_VERSION") {
        config.api_version = version.trim_start_matches('v').to_string();
    }
    config.token = get("SANITY_API_TOKEN");
    config.use_cdn = parse_bool("SANITY_USE_CDN", get("SANITY_USE_CDN"))?;

    Ok(config)
}

fn lead_email_from<G>(inbox: String, get: &G) -> Result<LeadEmailConfig, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    if !EmailAddress::is_valid(&inbox) {
        return Err(ConfigError::Invalid {
            key: "LEAD_NOTIFY_EMAIL",
            value: inbox,
        });
    }

    let from_email = get("EMAIL_FROM").ok_or(ConfigError::Missing("EMAIL_FROM"))?;
    if !EmailAddress::is_valid(&from_email) {
        return Err(ConfigError::Invalid {
            key: "EMAIL_FROM",
            value: from_email,
        });
    }

    let smtp = match get("SMTP_SERVER") {
        Some(server) => SmtpSettings::Relay {
            server,
            username: get("SMTP_USERNAME").ok_or(ConfigError::Missing("SMTP_USERNAME"))?,
            password: get("SMTP_PASSWORD").ok_or(ConfigError::Missing("SMTP_PASSWORD"))?,
        },
        None => SmtpSettings::Local {
            host: get("SMTP_HOST").unwrap_or_else(|| SiteConfig::DEFAULT_SMTP_HOST.to_string()),
            port: parse_or("SMTP_PORT", get("SMTP_PORT"), SiteConfig::DEFAULT_SMTP_PORT)?,
        },
    };

    Ok(LeadEmailConfig {
        inbox,
        from_email,
        smtp,
    })
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("false") | Some("0") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some(_) => Err(ConfigError::Invalid {
            key,
            value: raw.unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn load(vars: HashMap<&'static str, &'static str>) -> Result<SiteConfig, ConfigError> {
        SiteConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(HashMap::new()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_env, "development");
        assert_eq!(config.content_source, ContentSource::Static);
        assert!(config.sanity.is_none());
        assert!(config.lead_email.is_none());
        assert!(config.site_logo.is_none());
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(hashmap! { "PORT" => "eighty" }).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn project_id_alone_selects_remote_content() {
        let config = load(hashmap! {
            "SANITY_PROJECT_ID" => "zp7mbokg",
            "SANITY_API_VERSION" => "v2023-05-03",
            "SANITY_USE_CDN" => "true",
        })
        .unwrap();

        assert_eq!(config.content_source, ContentSource::Sanity);
        let sanity = config.sanity.unwrap();
        assert_eq!(sanity.project_id, "zp7mbokg");
        assert_eq!(sanity.dataset, "production");
        assert_eq!(sanity.api_version, "2023-05-03");
        assert!(sanity.use_cdn);
        assert!(sanity.token.is_none());
    }

    #[test]
    fn explicit_static_source_ignores_sanity_settings() {
        let config = load(hashmap! {
            "CONTENT_SOURCE" => "static",
            "SANITY_PROJECT_ID" => "zp7mbokg",
        })
        .unwrap();

        assert_eq!(config.content_source, ContentSource::Static);
        assert!(config.sanity.is_none());
    }

    #[test]
    fn sanity_source_requires_project_id() {
        let err = load(hashmap! { "CONTENT_SOURCE" => "sanity" }).unwrap_err();
        assert_eq!(err, ConfigError::Missing("SANITY_PROJECT_ID"));
    }

    #[test]
    fn unknown_content_source_is_rejected() {
        let err = load(hashmap! { "CONTENT_SOURCE" => "wordpress" }).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CONTENT_SOURCE", .. }));
    }

    #[test]
    fn bad_cdn_flag_is_rejected() {
        let err = load(hashmap! {
            "SANITY_PROJECT_ID" => "zp7mbokg",
            "SANITY_USE_CDN" => "sometimes",
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SANITY_USE_CDN", .. }));
    }

    #[test]
    fn lead_email_defaults_to_local_smtp() {
        let config = load(hashmap! {
            "LEAD_NOTIFY_EMAIL" => "hello@savvy.studio",
            "EMAIL_FROM" => "site@savvy.studio",
        })
        .unwrap();

        let lead = config.lead_email.unwrap();
        assert_eq!(lead.inbox, "hello@savvy.studio");
        assert_eq!(
            lead.smtp,
            SmtpSettings::Local {
                host: "localhost".to_string(),
                port: 1025
            }
        );
    }

    #[test]
    fn smtp_relay_requires_credentials() {
        let err = load(hashmap! {
            "LEAD_NOTIFY_EMAIL" => "hello@savvy.studio",
            "EMAIL_FROM" => "site@savvy.studio",
            "SMTP_SERVER" => "smtp.example.com",
            "SMTP_USERNAME" => "mailer",
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("SMTP_PASSWORD"));
    }

    #[test]
    fn invalid_inbox_address_is_rejected() {
        let err = load(hashmap! {
            "LEAD_NOTIFY_EMAIL" => "not-an-email",
            "EMAIL_FROM" => "site@savvy.studio",
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LEAD_NOTIFY_EMAIL", .. }));
    }

    #[test]
    fn lead_email_requires_sender_address() {
        let err = load(hashmap! { "LEAD_NOTIFY_EMAIL" => "hello@savvy.studio" }).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAIL_FROM"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(hashmap! { "HOST" => "  ", "SITE_LOGO" => "" }).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.site_logo.is_none());
    }
}
