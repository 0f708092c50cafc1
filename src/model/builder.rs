use super::entity::{ENTITY_TAG, Entity};
use super::registry::Registry;
use crate::core::Result;
use crate::schema::SchemaElement;
use log::{debug, info};

/// Build the registry from the root of a schema document: one entity per
/// `<entity>` child, in document order. Other children are skipped.
pub fn build(root: &SchemaElement) -> Result<Registry> {
    let entities = root
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.tag == ENTITY_TAG)
        .map(|(position, child)| {
            let entity = Entity::from_element(child, position)?;
            debug!(
                "Built entity '{}' ({} attributes, {} relationships, parent: {})",
                entity.name(),
                entity.attributes().len(),
                entity.relationships().len(),
                entity.parent_name().unwrap_or("-")
            );
            Ok(entity)
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Model contains {} entities", entities.len());
    Ok(Registry::new(entities))
}

impl Registry {
    pub fn from_schema(root: &SchemaElement) -> Result<Self> {
        build(root)
    }
}
