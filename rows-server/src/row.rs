use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type RowId = i64;

/// A single stored record: an integer `id` plus whatever other JSON members
/// the client sent alongside it.
///
/// Nothing about a row is validated. Ids may repeat, and a payload whose
/// `id` is missing or `null` is stored under id `0`. Ids are 64-bit, so
/// values past `i32::MAX` are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Row {
    #[serde(default, deserialize_with = "id_or_zero")]
    pub id: RowId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Row {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            fields: Map::new(),
        }
    }

    /// Adds (or replaces) one extra field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

fn id_or_zero<'de, D>(deserializer: D) -> Result<RowId, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RowId>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_sit_next_to_id_on_the_wire() {
        let row = Row::new(7).with_field("name", "Pears").with_field("quantity", 3);

        let encoded = serde_json::to_value(&row).expect("encode row");
        assert_eq!(encoded, json!({ "id": 7, "name": "Pears", "quantity": 3 }));
    }

    #[test]
    fn payload_without_id_defaults_to_zero() {
        let row: Row = serde_json::from_value(json!({ "name": "Plums" })).expect("decode row");

        assert_eq!(row.id, 0);
        assert_eq!(row.fields.get("name"), Some(&json!("Plums")));
    }

    #[test]
    fn null_id_defaults_to_zero() {
        let row: Row =
            serde_json::from_value(json!({ "id": null, "name": "x" })).expect("decode row");

        assert_eq!(row, Row::new(0).with_field("name", "x"));
    }

    #[test]
    fn ids_wider_than_32_bits_are_kept() {
        let id = i64::from(i32::MAX) + 1;
        let row: Row = serde_json::from_value(json!({ "id": id })).expect("decode row");

        assert_eq!(row.id, id);
    }

    #[test]
    fn nested_fields_are_kept_verbatim() {
        let payload = json!({ "id": 3, "tags": ["a", "b"], "meta": { "note": null } });
        let row: Row = serde_json::from_value(payload.clone()).expect("decode row");

        assert_eq!(serde_json::to_value(&row).expect("encode row"), payload);
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let result = serde_json::from_value::<Row>(json!({ "id": "one" }));
        assert!(result.is_err());
    }
}
