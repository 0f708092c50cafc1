use super::user_info::{FORCE_UNWRAP, UserInfo};
use crate::core::Result;
use crate::schema::SchemaElement;
use once_cell::unsync::OnceCell;

/// The part of a field shared by attributes and relationships.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub name: String,
    pub is_optional: bool,
    pub user_info: UserInfo,
    optionality_marker: OnceCell<&'static str>,
}

impl FieldInfo {
    pub fn new(name: &str, is_optional: bool, user_info: UserInfo) -> Self {
        Self {
            name: name.to_string(),
            is_optional,
            user_info,
            optionality_marker: OnceCell::new(),
        }
    }

    /// Read `name`, `optional` and the user info block of a field element.
    /// `kind` and `entity` only name the element in errors.
    pub fn from_element(element: &SchemaElement, kind: &str, entity: &str) -> Result<Self> {
        let name = element.require("name", || format!("{} in entity '{}'", kind, entity))?;
        let user_info = UserInfo::from_element(element, || {
            format!("{} '{}' in entity '{}'", kind, name, entity)
        })?;

        Ok(Self::new(name, element.flag("optional"), user_info))
    }

    /// `""` for required fields, `"!"` for optional fields annotated with
    /// `force_unwrap`, `"?"` for other optional fields.
    pub fn optionality_marker(&self) -> &'static str {
        self.optionality_marker.get_or_init(|| {
            if !self.is_optional {
                ""
            } else if self.user_info.contains(FORCE_UNWRAP) {
                "!"
            } else {
                "?"
            }
        })
    }
}
