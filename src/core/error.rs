use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    /// A required attribute or entry is missing from a schema element
    #[error("Schema error in {element}: {message}")]
    Schema { element: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Render error for entity '{entity}': {message}")]
    Render { entity: String, message: String },

    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    pub fn schema(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            element: element.into(),
            message: message.into(),
        }
    }

    pub fn missing(element: impl Into<String>, attribute: &str) -> Self {
        Self::schema(element, format!("missing required attribute '{}'", attribute))
    }

    pub fn render(entity: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            entity: entity.into(),
            message: message.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<roxmltree::Error> for GenError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
