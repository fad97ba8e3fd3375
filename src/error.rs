use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while building menu responses
#[derive(Error, Debug)]
pub enum MenuError {
    /// No tag of type `menu_name` matches the requested menu
    #[error("Menu '{0}' not found.")]
    MenuNotFound(String),

    /// The menu exists but has no recipes that fit the weekly grid
    #[error("Recipes for '{0}' were not found.")]
    RecipesNotFound(String),

    /// Failed to read a catalog file
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON or has the wrong shape
    #[error("Invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog parsed but references data that does not exist
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Body returned alongside a failed menu request, `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl MenuError {
    /// HTTP status an outer handler should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            MenuError::MenuNotFound(_) | MenuError::RecipesNotFound(_) => 404,
            _ => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}
