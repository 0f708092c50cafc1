use super::attribute::{ATTRIBUTE_TAG, Attribute};
use super::relationship::{RELATIONSHIP_TAG, Relationship};
use crate::core::Result;
use crate::schema::SchemaElement;
use once_cell::unsync::OnceCell;

pub const ENTITY_TAG: &str = "entity";
pub const UNIQUENESS_CONSTRAINTS_TAG: &str = "uniquenessConstraints";

/// Position of a field inside a registry: owning entity, then field index
/// within that entity's own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldSlot {
    pub entity: usize,
    pub field: usize,
}

/// One modeled record type with its own (not inherited) fields.
///
/// The parent is referenced by name only. Everything that needs other
/// entities is resolved through [`super::EntityRef`] and cached in the
/// `OnceCell`s below. Those caches hold positions in one registry, so a clone
/// starts with them empty.
#[derive(Debug)]
pub struct Entity {
    name: String,
    parent_name: Option<String>,
    attributes: Vec<Attribute>,
    relationships: Vec<Relationship>,
    uniqueness_constraint: Option<String>,

    pub(crate) parent: OnceCell<Option<usize>>,
    pub(crate) all_attributes: OnceCell<Vec<FieldSlot>>,
    pub(crate) all_relationships: OnceCell<Vec<FieldSlot>>,
    pub(crate) constraint_owner: OnceCell<Option<usize>>,
}

impl Clone for Entity {
    fn clone(&self) -> Self {
        Self::new(
            &self.name,
            self.parent_name.as_deref(),
            self.attributes.clone(),
            self.relationships.clone(),
            self.uniqueness_constraint.as_deref(),
        )
    }
}

impl Entity {
    pub fn new(
        name: &str,
        parent_name: Option<&str>,
        attributes: Vec<Attribute>,
        relationships: Vec<Relationship>,
        uniqueness_constraint: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            parent_name: parent_name.map(str::to_string),
            attributes,
            relationships,
            uniqueness_constraint: uniqueness_constraint.map(str::to_string),
            parent: OnceCell::new(),
            all_attributes: OnceCell::new(),
            all_relationships: OnceCell::new(),
            constraint_owner: OnceCell::new(),
        }
    }

    /// Build an entity from an `<entity>` element. `position` is the index
    /// of the element among its siblings and is only used in errors.
    pub fn from_element(element: &SchemaElement, position: usize) -> Result<Self> {
        let name = element.require("name", || format!("entity #{}", position))?;

        let mut attributes = Vec::new();
        let mut relationships = Vec::new();
        for child in &element.children {
            match child.tag.as_str() {
                ATTRIBUTE_TAG => attributes.push(Attribute::from_element(child, name)?),
                RELATIONSHIP_TAG => relationships.push(Relationship::from_element(child, name)?),
                _ => {}
            }
        }

        Ok(Self::new(
            name,
            element.attr("parentEntity"),
            attributes,
            relationships,
            read_uniqueness_constraint(element),
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Constraint declared on this entity itself
    pub fn uniqueness_constraint(&self) -> Option<&str> {
        self.uniqueness_constraint.as_deref()
    }
}

/// `<uniquenessConstraints><uniquenessConstraint><constraint value="email"/>`:
/// the value of the first entry of the first constraint.
fn read_uniqueness_constraint(element: &SchemaElement) -> Option<&str> {
    element
        .first_child(UNIQUENESS_CONSTRAINTS_TAG)?
        .children
        .first()?
        .children
        .first()?
        .attr("value")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(name: &str) -> SchemaElement {
        SchemaElement::new(ATTRIBUTE_TAG)
            .attr_set("name", name)
            .attr_set("attributeType", "String")
    }

    #[test]
    fn test_partitions_fields_in_order() {
        let element = SchemaElement::new(ENTITY_TAG)
            .attr_set("name", "Team")
            .attr_set("parentEntity", "Base")
            .child(attribute("a"))
            .child(
                SchemaElement::new(RELATIONSHIP_TAG)
                    .attr_set("name", "members")
                    .attr_set("toMany", "YES"),
            )
            .child(SchemaElement::new("fetchIndex").attr_set("name", "byName"))
            .child(attribute("b"));

        let entity = Entity::from_element(&element, 0).unwrap();
        assert_eq!(entity.name(), "Team");
        assert_eq!(entity.parent_name(), Some("Base"));

        let names: Vec<_> = entity.attributes().iter().map(Attribute::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(entity.relationships().len(), 1);
        assert_eq!(entity.uniqueness_constraint(), None);
    }

    #[test]
    fn test_reads_first_uniqueness_constraint() {
        let element = SchemaElement::new(ENTITY_TAG).attr_set("name", "User").child(
            SchemaElement::new(UNIQUENESS_CONSTRAINTS_TAG)
                .child(
                    SchemaElement::new("uniquenessConstraint")
                        .child(SchemaElement::new("constraint").attr_set("value", "email"))
                        .child(SchemaElement::new("constraint").attr_set("value", "phone")),
                )
                .child(
                    SchemaElement::new("uniquenessConstraint")
                        .child(SchemaElement::new("constraint").attr_set("value", "handle")),
                ),
        );

        let entity = Entity::from_element(&element, 0).unwrap();
        assert_eq!(entity.uniqueness_constraint(), Some("email"));
    }

    #[test]
    fn test_empty_constraints_block() {
        let element = SchemaElement::new(ENTITY_TAG)
            .attr_set("name", "User")
            .child(SchemaElement::new(UNIQUENESS_CONSTRAINTS_TAG));

        let entity = Entity::from_element(&element, 0).unwrap();
        assert_eq!(entity.uniqueness_constraint(), None);
    }

    #[test]
    fn test_missing_entity_name() {
        let element = SchemaElement::new(ENTITY_TAG);
        let err = Entity::from_element(&element, 4).unwrap_err();
        assert!(err.to_string().contains("entity #4"));
    }

    #[test]
    fn test_field_error_names_entity() {
        let element = SchemaElement::new(ENTITY_TAG)
            .attr_set("name", "Team")
            .child(SchemaElement::new(RELATIONSHIP_TAG).attr_set("toMany", "YES"));

        let err = Entity::from_element(&element, 0).unwrap_err();
        assert!(err.to_string().contains("relationship in entity 'Team'"));
    }
}
