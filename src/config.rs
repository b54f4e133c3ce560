use std::sync::LazyLock;

use crate::content::PERSONAL;
use crate::error::AppError;

static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_build_env);

/// Settings baked in at compile time. See `build.rs` for the variable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: Option<&'static str>,
    pub supabase_anon_key: Option<&'static str>,
    pub emailjs_service_id: Option<&'static str>,
    pub emailjs_template_id: Option<&'static str>,
    pub emailjs_public_key: Option<&'static str>,
    pub owner_email: &'static str,
    pub profile_upload: bool,
}

pub fn config() -> &'static Config {
    &CONFIG
}

impl Config {
    fn from_build_env() -> Self {
        Self {
            supabase_url: non_empty(option_env!("PORTFOLIO_SUPABASE_URL"))
                .map(|url| url.trim_end_matches('/')),
            supabase_anon_key: non_empty(option_env!("PORTFOLIO_SUPABASE_ANON_KEY")),
            emailjs_service_id: non_empty(option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")),
            emailjs_template_id: non_empty(option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")),
            emailjs_public_key: non_empty(option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")),
            owner_email: non_empty(option_env!("PORTFOLIO_OWNER_EMAIL")).unwrap_or(PERSONAL.email),
            profile_upload: parse_flag(option_env!("PORTFOLIO_PROFILE_UPLOAD"), true),
        }
    }
}

/// Unwraps a setting or reports which variable is missing.
pub fn required(value: Option<&'static str>, name: &'static str) -> Result<&'static str, AppError> {
    value.ok_or(AppError::NotConfigured(name))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
        assert!(!parse_flag(Some("0"), true));
        assert!(!parse_flag(Some(" False "), true));
        assert!(parse_flag(Some("yes"), false));
        // Garbage falls back to the default
        assert!(parse_flag(Some("maybe"), true));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" abc ")), Some("abc"));
    }

    #[test]
    fn test_required_names_missing_variable() {
        assert_eq!(required(Some("x"), "VAR"), Ok("x"));
        assert_eq!(
            required(None, "PORTFOLIO_SUPABASE_URL"),
            Err(AppError::NotConfigured("PORTFOLIO_SUPABASE_URL"))
        );
    }
}
