use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::basic_info::{MergedValue, ModelDraftFields};
use super::data_source::DataSourceId;

pub type DataModelId = i64;

/// Whether the wizard creates a new model or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WizardMode {
    #[default]
    Create,
    Edit,
}

impl WizardMode {
    /// Model code and data source are frozen once an edit has moved past the first step
    pub fn locks_identity(self, global_step: u32) -> bool {
        self == WizardMode::Edit && global_step > 0
    }
}

/// Model state owned by the wizard and shared by all of its steps
///
/// Keys that belong to other steps and are not modelled here are kept in
/// `rest` and survive every update untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DataModelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_en_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_id: Option<DataSourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default)]
    pub join_list: Vec<Value>,
    #[serde(default)]
    pub column_list: Vec<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ModelDetail {
    /// Wizard state after a new data source was picked on the basic info step.
    ///
    /// Current form values and the new `ds_id` are laid over `prev`; schema,
    /// table and join/column configuration of later steps are dropped since
    /// they belonged to the previous data source.
    pub fn after_data_source_change(
        prev: ModelDetail,
        fields: &ModelDraftFields,
        ds_id: Option<DataSourceId>,
    ) -> ModelDetail {
        ModelDetail {
            model_name: Some(fields.model_name.clone()),
            model_en_name: Some(fields.model_en_name.clone()),
            remark: Some(fields.remark.clone()),
            ds_id,
            schema: None,
            table_name: None,
            join_list: Vec::new(),
            column_list: Vec::new(),
            ..prev
        }
    }

    /// Overlay a value pulled from a wizard step onto this state
    pub fn absorb(&mut self, value: &MergedValue) -> Result<(), serde_json::Error> {
        let mut map = match serde_json::to_value(&*self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, v) in value.as_map() {
            map.insert(key.clone(), v.clone());
        }
        *self = serde_json::from_value(Value::Object(map))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_with_later_steps() -> ModelDetail {
        serde_json::from_value(json!({
            "id": 7,
            "modelName": "销售模型",
            "modelEnName": "sales_model",
            "dsId": 3,
            "remark": "",
            "schema": "dw",
            "tableName": "fact_sales",
            "joinList": [{"table": "dim_shop"}],
            "columnList": [{"name": "amount"}],
            "step": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_locks_identity() {
        assert!(WizardMode::Edit.locks_identity(1));
        assert!(WizardMode::Edit.locks_identity(3));
        assert!(!WizardMode::Edit.locks_identity(0));
        assert!(!WizardMode::Create.locks_identity(0));
        assert!(!WizardMode::Create.locks_identity(2));
    }

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(serde_json::to_string(&WizardMode::Edit).unwrap(), "\"EDIT\"");
        let mode: WizardMode = serde_json::from_str("\"CREATE\"").unwrap();
        assert_eq!(mode, WizardMode::Create);
    }

    #[test]
    fn test_data_source_change_resets_later_steps() {
        let fields = ModelDraftFields {
            model_name: "新模型".into(),
            model_en_name: "new_model".into(),
            ds_id: Some(3),
            remark: "备注".into(),
        };
        let next = ModelDetail::after_data_source_change(detail_with_later_steps(), &fields, Some(5));

        assert_eq!(next.id, Some(7));
        assert_eq!(next.ds_id, Some(5));
        assert_eq!(next.model_name.as_deref(), Some("新模型"));
        assert_eq!(next.model_en_name.as_deref(), Some("new_model"));
        assert_eq!(next.remark.as_deref(), Some("备注"));
        assert_eq!(next.schema, None);
        assert_eq!(next.table_name, None);
        assert!(next.join_list.is_empty());
        assert!(next.column_list.is_empty());
        assert_eq!(next.rest.get("step"), Some(&json!(2)));
    }

    #[test]
    fn test_data_source_change_from_empty_state() {
        let next = ModelDetail::after_data_source_change(
            ModelDetail::default(),
            &ModelDraftFields::default(),
            Some(1),
        );
        assert_eq!(next.ds_id, Some(1));
        assert!(next.join_list.is_empty());
        assert!(next.column_list.is_empty());
    }

    #[test]
    fn test_absorb_overlays_known_and_unknown_keys() {
        let mut detail = detail_with_later_steps();
        let value = MergedValue::from_map(
            json!({
                "modelName": "改名",
                "dsId": 9,
                "dsUrl": "jdbc:mysql://db:3306/dw"
            })
            .as_object()
            .cloned()
            .unwrap(),
        );

        detail.absorb(&value).unwrap();

        assert_eq!(detail.model_name.as_deref(), Some("改名"));
        assert_eq!(detail.ds_id, Some(9));
        assert_eq!(detail.schema.as_deref(), Some("dw"));
        assert_eq!(detail.rest.get("dsUrl"), Some(&json!("jdbc:mysql://db:3306/dw")));
        assert_eq!(detail.rest.get("step"), Some(&json!(2)));
    }
}
