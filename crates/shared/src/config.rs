//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Labels shown in the workspace shell.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Shell branding and the signed-in profile shown in the header.
///
/// There is no identity backend, so the profile is static.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Product name shown in the sidebar and page titles.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Company shown under the product name.
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Display name of the signed-in user.
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// Role of the signed-in user.
    #[serde(default = "default_user_role")]
    pub user_role: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            company_name: default_company_name(),
            user_name: default_user_name(),
            user_role: default_user_role(),
        }
    }
}

fn default_product_name() -> String {
    "Canteiro".to_string()
}

fn default_company_name() -> String {
    "Construções Silva & Filhos".to_string()
}

fn default_user_name() -> String {
    "Ricardo Silva".to_string()
}

fn default_user_role() -> String {
    "Administrador".to_string()
}

impl UiConfig {
    /// Initials used for the avatar in the header, at most two letters.
    #[must_use]
    pub fn user_initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CANTEIRO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
