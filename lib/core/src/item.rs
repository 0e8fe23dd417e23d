//! Records returned by an integration load, and the credentials sent with it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Identifier of a loaded item. Services emit either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Text(String),
    Number(serde_json::Number),
}

impl ItemId {
    /// Whether this id is usable as a list key.
    ///
    /// Empty strings and zero are not, matching how the service treats them.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One record of integration data.
///
/// Decoding never rejects an item for the shape of a single field: nulls
/// read as absent, and scalars other than strings keep their JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedItem {
    #[serde(rename = "type", default, deserialize_with = "text_or_empty")]
    pub item_type: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "optional_text")]
    pub creation_time: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub last_modified_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_path_or_name: Option<JsonValue>,
}

fn value_text(value: JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(value_text)
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<ItemId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => None,
        JsonValue::Number(n) => Some(ItemId::Number(n)),
        other => value_text(other).map(ItemId::Text),
    })
}

impl LoadedItem {
    /// Creates an item with only a type and id set.
    #[must_use]
    pub fn new(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            name: None,
            id: Some(ItemId::Text(id.into())),
            creation_time: None,
            last_modified_time: None,
            parent_id: None,
            parent_path_or_name: None,
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets both timestamps.
    #[must_use]
    pub fn with_times(
        mut self,
        creation_time: impl Into<String>,
        last_modified_time: impl Into<String>,
    ) -> Self {
        self.creation_time = Some(creation_time.into());
        self.last_modified_time = Some(last_modified_time.into());
        self
    }
}

/// Opaque authentication payload for the target integration.
///
/// The shape is owned by the integration service; it is forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(JsonValue);

impl Credentials {
    /// Wraps a JSON value.
    #[must_use]
    pub const fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Parses credentials from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// The wrapped value.
    #[must_use]
    pub const fn as_value(&self) -> &JsonValue {
        &self.0
    }

    /// JSON text sent in the `credentials` form field.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}

impl From<JsonValue> for Credentials {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_service_item() {
        let json = r#"{
            "id": "123_Contact",
            "type": "Contact",
            "name": "Ada Lovelace",
            "parent_id": null,
            "parent_path_or_name": null,
            "creation_time": "2024-01-02T03:04:05",
            "last_modified_time": "2024-02-03T04:05:06"
        }"#;
        let item: LoadedItem = serde_json::from_str(json).expect("decode");
        assert_eq!(item.item_type, "Contact");
        assert_eq!(item.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(item.id, Some(ItemId::Text("123_Contact".to_string())));
        assert_eq!(item.creation_time.as_deref(), Some("2024-01-02T03:04:05"));
        assert!(item.parent_id.is_none());
    }

    #[test]
    fn decode_tolerates_missing_fields() {
        let item: LoadedItem = serde_json::from_str(r#"{"type":"Task"}"#).expect("decode");
        assert_eq!(item.item_type, "Task");
        assert!(item.name.is_none());
        assert!(item.id.is_none());
        assert!(item.creation_time.is_none());
        assert!(item.last_modified_time.is_none());
    }

    #[test]
    fn explicit_nulls_read_as_absent() {
        let json = r#"[{
            "id": null,
            "type": null,
            "name": null,
            "creation_time": null,
            "last_modified_time": null,
            "parent_id": null,
            "parent_path_or_name": null
        }]"#;
        let items: Vec<LoadedItem> = serde_json::from_str(json).expect("decode");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_type, "");
        assert!(items[0].name.is_none());
        assert!(items[0].id.is_none());
        assert!(items[0].creation_time.is_none());
        assert!(items[0].parent_id.is_none());
    }

    #[test]
    fn non_string_fields_do_not_fail_the_list() {
        let json = r#"[
            {"id": "1", "type": "Task", "parent_id": 7, "parent_path_or_name": ["a", "b"]},
            {"id": "2", "type": 3, "name": 12, "creation_time": 1704067200000}
        ]"#;
        let items: Vec<LoadedItem> = serde_json::from_str(json).expect("decode");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].parent_id, Some(JsonValue::from(7)));
        assert_eq!(items[1].item_type, "3");
        assert_eq!(items[1].name.as_deref(), Some("12"));
        assert_eq!(items[1].creation_time.as_deref(), Some("1704067200000"));
    }

    #[test]
    fn numeric_id_displays_as_number() {
        let item: LoadedItem = serde_json::from_str(r#"{"type":"Row","id":42}"#).expect("decode");
        let id = item.id.expect("id");
        assert_eq!(id.to_string(), "42");
        assert!(!id.is_blank());
    }

    #[test]
    fn blank_ids() {
        assert!(ItemId::Text(String::new()).is_blank());
        assert!(ItemId::Number(0.into()).is_blank());
        assert!(!ItemId::Text("0".to_string()).is_blank());
    }

    #[test]
    fn credentials_pass_through_unchanged() {
        let creds = Credentials::from_json_str(r#"{"access_token":"abc","expires_in":3600}"#)
            .expect("parse");
        assert_eq!(creds.as_value()["access_token"], "abc");
        let text = creds.to_json_string();
        let reparsed: JsonValue = serde_json::from_str(&text).expect("reparse");
        assert_eq!(&reparsed, creds.as_value());
    }

    #[test]
    fn default_credentials_serialize_as_null() {
        assert_eq!(Credentials::default().to_json_string(), "null");
    }
}
