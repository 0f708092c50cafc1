use super::field::FieldInfo;
use super::user_info::{JSON_KEY, UserInfo};
use crate::core::Result;
use crate::schema::SchemaElement;
use once_cell::unsync::OnceCell;

pub const RELATIONSHIP_TAG: &str = "relationship";

/// Generated type of one JSON object
pub const JSON_OBJECT_TYPE: &str = "JSONResponse";

/// A reference field pointing at one or many instances of another entity.
///
/// The destination is kept by name only.
#[derive(Debug, Clone)]
pub struct Relationship {
    field: FieldInfo,
    to_many: bool,
    ordered: bool,
    destination_entity: Option<String>,

    wire_key: OnceCell<Option<String>>,
    is_key_path: OnceCell<bool>,
    value_expression: OnceCell<Option<String>>,
}

impl Relationship {
    pub fn new(
        field: FieldInfo,
        to_many: bool,
        ordered: bool,
        destination_entity: Option<&str>,
    ) -> Self {
        Self {
            field,
            to_many,
            ordered,
            destination_entity: destination_entity.map(str::to_string),
            wire_key: OnceCell::new(),
            is_key_path: OnceCell::new(),
            value_expression: OnceCell::new(),
        }
    }

    pub fn from_element(element: &SchemaElement, entity: &str) -> Result<Self> {
        let field = FieldInfo::from_element(element, RELATIONSHIP_TAG, entity)?;
        Ok(Self::new(
            field,
            element.flag("toMany"),
            element.flag("ordered"),
            element.attr("destinationEntity"),
        ))
    }

    pub fn name(&self) -> &str {
        &self.field.name
    }

    pub fn is_optional(&self) -> bool {
        self.field.is_optional
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.field.user_info
    }

    pub fn to_many(&self) -> bool {
        self.to_many
    }

    pub fn ordered(&self) -> bool {
        self.ordered
    }

    pub fn destination_entity(&self) -> Option<&str> {
        self.destination_entity.as_deref()
    }

    pub fn optionality_marker(&self) -> &'static str {
        self.field.optionality_marker()
    }

    /// The first `json_key` annotation. Relationships without one (or with an
    /// empty one) are not read from JSON.
    pub fn wire_key(&self) -> Option<&str> {
        self.wire_key
            .get_or_init(|| {
                self.field
                    .user_info
                    .first(JSON_KEY)
                    .filter(|key| !key.is_empty())
                    .map(str::to_string)
            })
            .as_deref()
    }

    pub fn is_key_path(&self) -> bool {
        *self
            .is_key_path
            .get_or_init(|| self.wire_key().is_some_and(|key| key.contains('.')))
    }

    pub fn value_expression(&self) -> Option<&str> {
        self.value_expression
            .get_or_init(|| {
                let key = self.wire_key()?;
                Some(if self.to_many {
                    format!("json[\"{}\"] as? [{}]", key, JSON_OBJECT_TYPE)
                } else {
                    format!("json[\"{}\"] as? {}", key, JSON_OBJECT_TYPE)
                })
            })
            .as_deref()
    }
}
