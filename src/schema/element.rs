use crate::core::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One element of a parsed schema document: a tag, its attributes and its
/// child elements in document order. Text content is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<SchemaElement>,
}

impl SchemaElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Set an attribute
    pub fn attr_set(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Append a child element
    pub fn child(mut self, child: SchemaElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Read a required attribute. `describe` names the element in the error
    /// and is only evaluated on failure.
    pub fn require(&self, name: &str, describe: impl FnOnce() -> String) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| GenError::missing(describe(), name))
    }

    /// Read a boolean flag. Absent or unrecognised values are false.
    pub fn flag(&self, name: &str) -> bool {
        self.attr(name).is_some_and(parse_flag)
    }

    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a SchemaElement> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    pub fn first_child(&self, tag: &str) -> Option<&SchemaElement> {
        self.children.iter().find(|child| child.tag == tag)
    }
}

fn parse_flag(value: &str) -> bool {
    ["yes", "true", "1"]
        .iter()
        .any(|truthy| value.trim().eq_ignore_ascii_case(truthy))
}
