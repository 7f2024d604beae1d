const FALLBACK_AUTH_API_URL: &str = "https://swiftcore.network/api/lk/auth";
const FALLBACK_DASHBOARD_API_URL: &str = "https://swiftcore.network/api/lk/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub auth_api_url: String,
    pub dashboard_api_url: String,
    pub default_email: String,
    pub default_password: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        EnvConfig {
            auth_api_url: normalize_url(lookup("DETECTRA_AUTH_API_URL"), FALLBACK_AUTH_API_URL),
            dashboard_api_url: normalize_url(
                lookup("DETECTRA_DASHBOARD_API_URL"),
                FALLBACK_DASHBOARD_API_URL,
            ),
            default_email: lookup("DETECTRA_DEFAULT_EMAIL")
                .unwrap_or_default()
                .trim()
                .to_string(),
            default_password: lookup("DETECTRA_DEFAULT_PASSWORD").unwrap_or_default(),
        }
    }
}

fn normalize_url(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => fallback.to_string(),
    }
}
