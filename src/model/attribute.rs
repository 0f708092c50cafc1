use super::field::FieldInfo;
use super::user_info::{JSON_IGNORE, JSON_KEY, JSON_TRANSFORMER, UserInfo};
use crate::core::Result;
use crate::core::naming::to_wire_key;
use crate::schema::SchemaElement;
use once_cell::unsync::OnceCell;

pub const ATTRIBUTE_TAG: &str = "attribute";

/// Declared type that is never read from JSON
pub const TRANSIENT_TYPE: &str = "transient";

/// A scalar field of an entity.
///
/// Every derived property is computed on first access and cached for the
/// lifetime of the attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    field: FieldInfo,
    declared_type: String,
    default_value: Option<String>,

    wire_key: OnceCell<String>,
    is_key_path: OnceCell<bool>,
    json_ignore: OnceCell<bool>,
    lookup_expression: OnceCell<String>,
    value_expression: OnceCell<String>,
    value_expression_with_default: OnceCell<String>,
}

impl Attribute {
    /// `raw_type` and `raw_default` are the schema strings; both are
    /// normalized here.
    pub fn new(field: FieldInfo, raw_type: &str, raw_default: Option<&str>) -> Self {
        let declared_type = normalize_type(raw_type);
        let default_value = normalize_default(&declared_type, raw_default);

        Self {
            field,
            declared_type,
            default_value,
            wire_key: OnceCell::new(),
            is_key_path: OnceCell::new(),
            json_ignore: OnceCell::new(),
            lookup_expression: OnceCell::new(),
            value_expression: OnceCell::new(),
            value_expression_with_default: OnceCell::new(),
        }
    }

    pub fn from_element(element: &SchemaElement, entity: &str) -> Result<Self> {
        let field = FieldInfo::from_element(element, ATTRIBUTE_TAG, entity)?;
        let raw_type = element.require("attributeType", || {
            format!("attribute '{}' in entity '{}'", field.name, entity)
        })?;
        let raw_default = element.attr("defaultValueString");

        Ok(Self::new(field, raw_type, raw_default))
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

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn optionality_marker(&self) -> &'static str {
        self.field.optionality_marker()
    }

    /// Key used to read this attribute from a JSON payload: the last
    /// non-empty `json_key` annotation, else the snake-cased name.
    pub fn wire_key(&self) -> &str {
        self.wire_key.get_or_init(|| {
            self.field
                .user_info
                .last_non_empty(JSON_KEY)
                .map_or_else(|| to_wire_key(&self.field.name), str::to_string)
        })
    }

    /// A dotted wire key is looked up as a nested key path
    pub fn is_key_path(&self) -> bool {
        *self.is_key_path.get_or_init(|| self.wire_key().contains('.'))
    }

    pub fn json_ignore(&self) -> bool {
        *self.json_ignore.get_or_init(|| {
            self.declared_type == TRANSIENT_TYPE
                || self
                    .field
                    .user_info
                    .entries()
                    .iter()
                    .any(|entry| entry.key == JSON_IGNORE && !entry.value.is_empty())
        })
    }

    /// Expression reading the raw JSON value, before any cast
    pub fn lookup_expression(&self) -> &str {
        self.lookup_expression.get_or_init(|| {
            if self.is_key_path() {
                format!(
                    "(json as AnyObject).value(forKeyPath: \"{}\")",
                    self.wire_key()
                )
            } else {
                format!("json[\"{}\"]", self.wire_key())
            }
        })
    }

    /// Expression producing the typed value from JSON.
    ///
    /// With `with_default` the default literal, if any, is appended as a
    /// `??` fallback. Null checks use the plain form so an absent key can be
    /// told apart from a defaulted one.
    pub fn value_expression(&self, with_default: bool) -> &str {
        let plain = self
            .value_expression
            .get_or_init(|| self.synthesize_value_expression());

        match (&self.default_value, with_default) {
            (Some(default), true) => self
                .value_expression_with_default
                .get_or_init(|| format!("{} ?? {}", plain, default)),
            _ => plain,
        }
    }

    fn synthesize_value_expression(&self) -> String {
        let lookup = self.lookup_expression();

        if let Some(transformer) = self.field.user_info.first_non_empty(JSON_TRANSFORMER) {
            return format!("{}({})", transformer, lookup);
        }

        if is_integer_type(&self.declared_type) {
            format!(
                "({} as? NSNumber)?.{}Value",
                lookup,
                self.declared_type.to_lowercase()
            )
        } else {
            format!("{} as? {}", lookup, self.declared_type)
        }
    }
}

/// Map a schema attribute type onto the generated type vocabulary:
/// `Integer NN` -> `IntNN`, `Boolean` -> `Bool`, `Binary` -> `Data`.
pub fn normalize_type(raw: &str) -> String {
    let normalized = raw.replace("Integer ", "Int");
    match normalized.as_str() {
        "Boolean" => "Bool".to_string(),
        "Binary" => "Data".to_string(),
        _ => normalized,
    }
}

/// Turn a schema default into a literal of `declared_type`. Bool defaults
/// become `true` only for `YES`; String defaults are quoted; an empty default
/// is treated as absent.
pub fn normalize_default(declared_type: &str, raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|value| !value.is_empty())?;

    let literal = match declared_type {
        "Bool" => String::from(if raw == "YES" { "true" } else { "false" }),
        "String" => format!("\"{}\"", raw),
        _ => raw.to_string(),
    };
    Some(literal)
}

fn is_integer_type(declared_type: &str) -> bool {
    declared_type.starts_with("Int")
}
