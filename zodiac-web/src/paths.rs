//! Deployment-relative URLs.
//!
//! `PUBLIC_URL` is the path the panel is served under (e.g. `/admin`) and
//! `ZODIAC_API_BASE` overrides where the admin API lives. Both are read at
//! compile time; unset values fall back to root-anchored defaults.
use zodiac_core::ConsoleConfig;

const DEFAULT_API_BASE: &str = "/api";

/// Base URL of the admin API.
#[must_use]
pub fn api_base() -> String {
    api_base_with(
        option_env!("ZODIAC_API_BASE"),
        option_env!("PUBLIC_URL").unwrap_or(""),
    )
}

/// Console settings for this deployment.
#[must_use]
pub fn console_config() -> ConsoleConfig {
    ConsoleConfig::default().with_api_base(api_base())
}

#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn api_base_with(explicit: Option<&str>, public_url: &str) -> String {
    match explicit.map(str::trim).filter(|value| !value.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => asset_path_with_base(DEFAULT_API_BASE, public_url),
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{api_base_with, asset_path, asset_path_with_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/logo.svg"), "/static/logo.svg");
        assert_eq!(asset_path("/static/logo.svg"), "/static/logo.svg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("static/logo.svg", "/admin/"),
            "/admin/static/logo.svg"
        );
    }

    #[test]
    fn api_base_follows_public_url_unless_overridden() {
        assert_eq!(api_base_with(None, ""), "/api");
        assert_eq!(api_base_with(None, "/admin"), "/admin/api");
        assert_eq!(api_base_with(Some("  "), "/admin"), "/admin/api");
        assert_eq!(
            api_base_with(Some("https://bot.example/api/"), "/admin"),
            "https://bot.example/api"
        );
    }
}
