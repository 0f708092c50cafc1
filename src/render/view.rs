use crate::core::Result;
use crate::model::{Attribute, EntityRef, Registry, Relationship, UserInfo};
use serde::Serialize;

/// Everything a template can see about one attribute
#[derive(Debug, Clone, Serialize)]
pub struct AttributeView<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub declared_type: &'a str,
    pub is_optional: bool,
    /// `""`, `"?"` or `"!"`
    pub optional: &'static str,
    pub default_value: Option<&'a str>,
    pub json_key: &'a str,
    pub is_key_path: bool,
    pub json_ignore: bool,
    pub json_value_expression: &'a str,
    pub json_value_expression_for_check_null: &'a str,
    pub user_info: &'a UserInfo,
}

impl<'a> From<&'a Attribute> for AttributeView<'a> {
    fn from(attribute: &'a Attribute) -> Self {
        Self {
            name: attribute.name(),
            declared_type: attribute.declared_type(),
            is_optional: attribute.is_optional(),
            optional: attribute.optionality_marker(),
            default_value: attribute.default_value(),
            json_key: attribute.wire_key(),
            is_key_path: attribute.is_key_path(),
            json_ignore: attribute.json_ignore(),
            json_value_expression: attribute.value_expression(true),
            json_value_expression_for_check_null: attribute.value_expression(false),
            user_info: attribute.user_info(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RelationshipView<'a> {
    pub name: &'a str,
    pub is_optional: bool,
    pub optional: &'static str,
    pub to_many: bool,
    pub ordered: bool,
    pub destination_entity: Option<&'a str>,
    pub json_key: Option<&'a str>,
    pub is_key_path: bool,
    pub json_value_expression: Option<&'a str>,
    pub user_info: &'a UserInfo,
}

impl<'a> From<&'a Relationship> for RelationshipView<'a> {
    fn from(relationship: &'a Relationship) -> Self {
        Self {
            name: relationship.name(),
            is_optional: relationship.is_optional(),
            optional: relationship.optionality_marker(),
            to_many: relationship.to_many(),
            ordered: relationship.ordered(),
            destination_entity: relationship.destination_entity(),
            json_key: relationship.wire_key(),
            is_key_path: relationship.is_key_path(),
            json_value_expression: relationship.value_expression(),
            user_info: relationship.user_info(),
        }
    }
}

/// A fully resolved entity as handed to the template: own fields, inherited
/// aggregates and the effective uniqueness constraint.
#[derive(Debug, Clone, Serialize)]
pub struct EntityView<'a> {
    pub name: &'a str,
    pub parent_name: Option<&'a str>,
    pub uniqueness_constraint: Option<&'a str>,
    pub attributes: Vec<AttributeView<'a>>,
    pub relationships: Vec<RelationshipView<'a>>,
    pub all_attributes: Vec<AttributeView<'a>>,
    pub all_relationships: Vec<RelationshipView<'a>>,
}

impl<'a> EntityView<'a> {
    pub fn new(entity: EntityRef<'a>) -> Self {
        let own = entity.entity();

        Self {
            name: own.name(),
            parent_name: own.parent_name(),
            uniqueness_constraint: entity.effective_uniqueness_constraint(),
            attributes: own.attributes().iter().map(AttributeView::from).collect(),
            relationships: own.relationships().iter().map(RelationshipView::from).collect(),
            all_attributes: entity
                .all_attributes()
                .into_iter()
                .map(AttributeView::from)
                .collect(),
            all_relationships: entity
                .all_relationships()
                .into_iter()
                .map(RelationshipView::from)
                .collect(),
        }
    }
}

/// Views of every entity in the registry, in registry order
pub fn entity_views(registry: &Registry) -> Vec<EntityView<'_>> {
    registry.iter().map(EntityView::new).collect()
}

/// The resolved model as pretty-printed JSON
pub fn model_json(registry: &Registry) -> Result<String> {
    Ok(serde_json::to_string_pretty(&entity_views(registry))?)
}
