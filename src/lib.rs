// ============================================================================
// entitygen Library
// ============================================================================

pub mod config;
pub mod core;
pub mod model;
pub mod render;
pub mod schema;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use crate::core::{GenError, Result, to_wire_key};
pub use model::{Attribute, Entity, EntityRef, Registry, Relationship, UserInfo};
pub use render::{EntityView, Renderer, TemplateRenderer};
pub use schema::SchemaElement;

use std::path::{Path, PathBuf};

// ============================================================================
// One-shot generation
// ============================================================================

/// Read a schema file and build its registry
pub fn load_registry(path: &Path) -> Result<Registry> {
    let root = schema::load(path)?;
    model::build(&root)
}

/// Run a full generation: read the input, resolve the model and write one
/// file per entity. Returns the paths written, in entity order.
///
/// # Examples
///
/// ```no_run
/// use entitygen::GeneratorConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GeneratorConfig::new("Team.xcdatamodeld/Team.xcdatamodel")
///     .output_dir("Sources/Generated");
/// let written = entitygen::generate(&config)?;
/// println!("Generated {} files", written.len());
/// # Ok(())
/// # }
/// ```
pub fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let registry = load_registry(&config.input)?;
    let renderer = TemplateRenderer::from_config(config)?;
    render::render_all(&registry, &renderer, config)
}
