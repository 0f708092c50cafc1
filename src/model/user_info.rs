use crate::core::{GenError, Result};
use crate::schema::SchemaElement;
use serde::Serialize;

pub const USER_INFO_TAG: &str = "userInfo";
pub const ENTRY_TAG: &str = "entry";

/// Overrides the wire key of a field
pub const JSON_KEY: &str = "json_key";
/// Name of a function applied to the raw JSON value
pub const JSON_TRANSFORMER: &str = "json_transformer";
pub const JSON_IGNORE: &str = "json_ignore";
/// Optional field is declared implicitly unwrapped (`!`)
pub const FORCE_UNWRAP: &str = "force_unwrap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfoEntry {
    pub key: String,
    pub value: String,
}

/// Free-form `(key, value)` annotations attached to a field.
///
/// Keys are not unique. Lookups scan the entries linearly in declaration
/// order, so each accessor documents which duplicate it picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserInfo {
    entries: Vec<UserInfoEntry>,
}

impl UserInfo {
    /// Read the `userInfo` child of a field element. A field without one has
    /// empty user info.
    pub fn from_element(field: &SchemaElement, describe: impl Fn() -> String) -> Result<Self> {
        let Some(block) = field.first_child(USER_INFO_TAG) else {
            return Ok(Self::default());
        };

        let entries = block
            .children_tagged(ENTRY_TAG)
            .map(|entry| {
                let key = entry.attr("key").ok_or_else(|| {
                    GenError::schema(describe(), "user info entry is missing 'key'")
                })?;
                Ok(UserInfoEntry {
                    key: key.to_string(),
                    value: entry.attr("value").unwrap_or_default().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| UserInfoEntry {
                    key: key.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[UserInfoEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Value of the first entry with `key`, even when that value is empty
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Value of the first entry with `key` whose value is not empty
    pub fn first_non_empty(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key && !entry.value.is_empty())
            .map(|entry| entry.value.as_str())
    }

    /// Value of the last entry with `key` whose value is not empty
    pub fn last_non_empty(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.key == key && !entry.value.is_empty())
            .map(|entry| entry.value.as_str())
    }
}
