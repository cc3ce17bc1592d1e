pub mod app_config;
pub mod catalog;
pub mod config;
pub mod products;
pub mod size;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, parse_catalog, validate_products, CatalogFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Product, SizeOption};
pub use size::{compare_size_labels, parse_size_magnitude};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    CatalogJsonParse(#[source] serde_json::Error),

    #[error("failed to parse catalog YAML: {0}")]
    CatalogYamlParse(#[source] serde_yaml::Error),

    #[error("unsupported catalog file format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedCatalogFormat { path: String },

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
