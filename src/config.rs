use crate::error::MenuError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const IMAGE_BASE: &str =
    "https://nutri-cat-images.s3.eu-central-1.amazonaws.com/compressed_images";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// Path to the JSON catalog holding tags, recipes and shopping infos
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Images assigned to menu categories, in category order
    #[serde(default = "default_category_images")]
    pub category_images: Vec<String>,
    /// Image used once `category_images` runs out
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            category_images: default_category_images(),
            fallback_image: default_fallback_image(),
        }
    }
}

// Default value functions
fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_category_images() -> Vec<String> {
    vec![
        format!("{IMAGE_BASE}/avocado_toast_with_egg_and_salad_compressed.jpg"),
        format!("{IMAGE_BASE}/chicken_lasagna_alla_genovese_compressed.jpg"),
        format!("{IMAGE_BASE}/guacamole_with_melon_and_lavash_nachos_compressed.jpg"),
    ]
}

fn default_fallback_image() -> String {
    format!("{IMAGE_BASE}/avocado_toast_with_egg_and_salad_compressed.jpg")
}

impl MenuConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with NUTRI__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: NUTRI__CATALOG_PATH.
    /// `NUTRI__CATEGORY_IMAGES` takes a comma-separated list.
    pub fn load() -> Result<Self, MenuError> {
        Ok(load_config()?)
    }
}

/// Load configuration from file and environment variables
///
/// See [`MenuConfig::load`] for the precedence rules.
pub fn load_config() -> Result<MenuConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested keys: NUTRI__CATALOG_PATH
        .add_source(
            Environment::with_prefix("NUTRI")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("category_images"),
        )
        .build()?;

    settings.try_deserialize()
}
