use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub workspace: WorkspaceConfig,
    pub pagination: PaginationConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    #[serde(default)]
    pub base_url: String,
    pub registry_search: String,
    pub content_search: String,
    pub content_retire: String,
    pub announcement_outbox: String,
    pub announcement_cancel: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WorkspaceConfig {
    pub page_limit: u32,
    pub content_types: Vec<String>,
    pub last_updated_on: String,
    pub limited_publish_route: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub page_strip: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    /// Toast lifetime in milliseconds
    pub dismiss_after_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
registry_search = "/api/reg/search"
content_search = "/api/content/v1/search"
content_retire = "/api/content/v1/retire"
announcement_outbox = "/api/announcement/v1/user/outbox"
announcement_cancel = "/api/v1/announcement/cancel"

[workspace]
page_limit = 9
content_types = ["Collection", "TextBook", "Course", "LessonPlan", "Resource", "Asset"]
last_updated_on = "desc"
limited_publish_route = "/workspace/content/limited/publish"

[pagination]
page_strip = 5

[notifications]
dismiss_after_ms = 5000
"#;

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Absolute URL of an API path, honouring `api.base_url`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }

    /// Workspace route of the given limited-published page
    pub fn limited_publish_page_route(&self, page: u32) -> String {
        format!(
            "{}/{}",
            self.workspace.limited_publish_route.trim_end_matches('/'),
            page
        )
    }
}

/// Load the embedded configuration.
///
/// A malformed embedded file is a build defect; it is logged and the
/// hardcoded fallback is used so the UI still starts.
pub fn load_config() -> AppConfig {
    match AppConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => {
            log::debug!("Loaded embedded configuration");
            config
        }
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            fallback_config()
        }
    }
}

fn fallback_config() -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: String::new(),
            registry_search: "/api/reg/search".to_string(),
            content_search: "/api/content/v1/search".to_string(),
            content_retire: "/api/content/v1/retire".to_string(),
            announcement_outbox: "/api/announcement/v1/user/outbox".to_string(),
            announcement_cancel: "/api/v1/announcement/cancel".to_string(),
        },
        workspace: WorkspaceConfig {
            page_limit: 9,
            content_types: vec!["Resource".to_string()],
            last_updated_on: "desc".to_string(),
            limited_publish_route: "/workspace/content/limited/publish".to_string(),
        },
        pagination: PaginationConfig { page_strip: 5 },
        notifications: NotificationConfig {
            dismiss_after_ms: 5000,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.workspace.page_limit, 9);
        assert_eq!(config.pagination.page_strip, 5);
        assert!(config.workspace.content_types.contains(&"Resource".to_string()));
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_api_url_and_routes() {
        let mut config = load_config();
        assert_eq!(
            config.api_url("/api/content/v1/search"),
            "/api/content/v1/search"
        );
        config.api.base_url = "https://portal.example.org/".to_string();
        assert_eq!(
            config.api_url("/api/reg/search"),
            "https://portal.example.org/api/reg/search"
        );
        assert_eq!(
            config.limited_publish_page_route(3),
            "/workspace/content/limited/publish/3"
        );
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(AppConfig::from_toml_str("[api]\nbase_url = \"\"").is_err());
    }
}
