use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cms: CmsConfig,
    pub enable_logging: bool,
    pub login_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cms: CmsConfig::default(),
            enable_logging: true,
            login_route: "/admin".to_string(),
        }
    }
}

/// Conexión con el CMS (API HTTP de consultas estilo Sanity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: "production".to_string(),
            api_version: "2023-01-01".to_string(),
            use_cdn: true,
            token: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("SANITY_PROJECT_ID"),
            option_env!("SANITY_DATASET"),
            option_env!("SANITY_API_VERSION"),
            option_env!("SANITY_USE_CDN"),
            option_env!("SANITY_TOKEN"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOGIN_ROUTE"),
        )
    }

    fn from_values(
        project_id: Option<&str>,
        dataset: Option<&str>,
        api_version: Option<&str>,
        use_cdn: Option<&str>,
        token: Option<&str>,
        enable_logging: Option<&str>,
        login_route: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            cms: CmsConfig {
                project_id: project_id.unwrap_or("").to_string(),
                dataset: dataset.unwrap_or(&defaults.cms.dataset).to_string(),
                api_version: api_version
                    .map(|v| v.trim_start_matches('v').to_string())
                    .unwrap_or(defaults.cms.api_version),
                use_cdn: use_cdn.unwrap_or("true").parse().unwrap_or(true),
                token: token.filter(|t| !t.is_empty()).map(|t| t.to_string()),
            },
            enable_logging: enable_logging.unwrap_or("true").parse().unwrap_or(true),
            login_route: login_route.unwrap_or(&defaults.login_route).to_string(),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel para wasm-logger según la configuración
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None, None, None, None, None, None);
        assert_eq!(config.cms.project_id, "");
        assert_eq!(config.cms.dataset, "production");
        assert_eq!(config.cms.api_version, "2023-01-01");
        assert!(config.cms.use_cdn);
        assert_eq!(config.cms.token, None);
        assert!(config.is_logging_enabled());
        assert_eq!(config.login_route, "/admin");
    }

    #[test]
    fn parses_values_and_strips_version_prefix() {
        let config = AppConfig::from_values(
            Some("abc123"),
            Some("staging"),
            Some("v2021-10-21"),
            Some("false"),
            Some("sk-token"),
            Some("false"),
            Some("/login"),
        );
        assert_eq!(config.cms.project_id, "abc123");
        assert_eq!(config.cms.dataset, "staging");
        assert_eq!(config.cms.api_version, "2021-10-21");
        assert!(!config.cms.use_cdn);
        assert_eq!(config.cms.token.as_deref(), Some("sk-token"));
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn invalid_booleans_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, Some("yes"), Some(""), Some("nope"), None);
        assert!(config.cms.use_cdn);
        assert!(config.enable_logging);
        assert_eq!(config.cms.token, None);
    }
}
