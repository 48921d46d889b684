use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type DataSourceId = i64;

/// Kind of a data source as reported by the listing service (`1` or `2` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DsType {
    One,
    Two,
}

impl DsType {
    pub fn code(self) -> u8 {
        match self {
            DsType::One => 1,
            DsType::Two => 2,
        }
    }
}

impl TryFrom<u8> for DsType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DsType::One),
            2 => Ok(DsType::Two),
            other => Err(format!("unknown dsType: {}", other)),
        }
    }
}

impl From<DsType> for u8 {
    fn from(value: DsType) -> Self {
        value.code()
    }
}

/// Entry of the data source selector
///
/// Attributes beyond the known ones are kept in `ext` and travel with the
/// entry into its metadata payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceItem {
    pub id: DataSourceId,
    pub ds_type: DsType,
    pub ds_type_name: String,
    pub ds_url: String,
    pub name: String,
    #[serde(flatten)]
    pub ext: Map<String, Value>,
}

impl DataSourceItem {
    /// Option text: `name(dsTypeName)`
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.ds_type_name)
    }

    /// Metadata merged into the step value once this entry is selected
    pub fn metadata(&self) -> ExtraMetadata {
        let mut map = Map::new();
        map.insert("id".into(), Value::from(self.id));
        map.insert("dsType".into(), Value::from(self.ds_type.code()));
        map.insert("dsTypeName".into(), Value::from(self.ds_type_name.clone()));
        map.insert("dsUrl".into(), Value::from(self.ds_url.clone()));
        map.insert("name".into(), Value::from(self.name.clone()));
        for (key, value) in &self.ext {
            map.insert(key.clone(), value.clone());
        }
        ExtraMetadata(map)
    }
}

/// Decode list entries one by one; entries that do not decode are returned as
/// messages instead of failing the whole list
pub fn decode_data_sources(raw: Vec<Value>) -> (Vec<DataSourceItem>, Vec<String>) {
    let mut items = Vec::with_capacity(raw.len());
    let mut skipped = Vec::new();
    for entry in raw {
        let id = entry.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<DataSourceItem>(entry) {
            Ok(item) => items.push(item),
            Err(e) => skipped.push(format!("data source {}: {}", id, e)),
        }
    }
    (items, skipped)
}

/// Descriptive data of the selected data source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraMetadata(Map<String, Value>);

impl ExtraMetadata {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries that may be merged next to the model's own fields (no `id`)
    pub fn mergeable(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(key, _)| key.as_str() != "id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_list_entry_with_extra_attributes() {
        let item: DataSourceItem = serde_json::from_value(json!({
            "id": 5,
            "dsType": 1,
            "dsTypeName": "MySQL",
            "dsUrl": "jdbc:mysql://db:3306/dw",
            "name": "dw",
            "driver": "mysql"
        }))
        .unwrap();

        assert_eq!(item.ds_type, DsType::One);
        assert_eq!(item.label(), "dw(MySQL)");
        assert_eq!(item.ext.get("driver"), Some(&json!("mysql")));
    }

    #[test]
    fn test_unknown_ds_type_rejected() {
        let result: Result<DataSourceItem, _> = serde_json::from_value(json!({
            "id": 1, "dsType": 3, "dsTypeName": "?", "dsUrl": "", "name": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_list_skips_bad_entries() {
        let raw = vec![
            json!({"id": 1, "dsType": 1, "dsTypeName": "MySQL", "dsUrl": "", "name": "a"}),
            json!({"id": 2, "dsType": 7, "dsTypeName": "?", "dsUrl": "", "name": "b"}),
            json!({"id": 3, "dsType": 2, "dsTypeName": "Hive", "dsUrl": "", "name": "c"}),
        ];

        let (items, skipped) = decode_data_sources(raw);

        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].starts_with("data source 2:"), "{}", skipped[0]);
    }

    #[test]
    fn test_metadata_contains_entry_attributes() {
        let item: DataSourceItem = serde_json::from_value(json!({
            "id": 5, "dsType": 2, "dsTypeName": "Hive", "dsUrl": "thrift://h:9083",
            "name": "lake", "driver": "hive2"
        }))
        .unwrap();
        let meta = item.metadata();

        assert_eq!(meta.get("id"), Some(&json!(5)));
        assert_eq!(meta.get("dsType"), Some(&json!(2)));
        assert_eq!(meta.get("dsUrl"), Some(&json!("thrift://h:9083")));
        assert_eq!(meta.get("driver"), Some(&json!("hive2")));
    }

    #[test]
    fn test_mergeable_drops_id() {
        let meta = ExtraMetadata::from_map(
            json!({"id": 99, "driver": "mysql"}).as_object().cloned().unwrap(),
        );
        let keys: Vec<&str> = meta.mergeable().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["driver"]);
    }
}
