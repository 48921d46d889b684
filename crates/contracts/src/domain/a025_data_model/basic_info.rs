use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::aggregate::ModelDetail;
use super::data_source::{DataSourceId, ExtraMetadata};

/// Fields of the basic info step, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BasicInfoField {
    ModelName,
    ModelEnName,
    DsId,
    Remark,
}

/// When a field re-runs its validation while the user edits it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTrigger {
    Blur,
    Change,
}

impl BasicInfoField {
    pub const ALL: [BasicInfoField; 4] = [
        BasicInfoField::ModelName,
        BasicInfoField::ModelEnName,
        BasicInfoField::DsId,
        BasicInfoField::Remark,
    ];

    /// Wire key of the field
    pub fn key(self) -> &'static str {
        match self {
            BasicInfoField::ModelName => "modelName",
            BasicInfoField::ModelEnName => "modelEnName",
            BasicInfoField::DsId => "dsId",
            BasicInfoField::Remark => "remark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BasicInfoField::ModelName => "模型名称",
            BasicInfoField::ModelEnName => "模型编码",
            BasicInfoField::DsId => "数据源",
            BasicInfoField::Remark => "备注",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            BasicInfoField::ModelName => "请输入模型名称",
            BasicInfoField::ModelEnName => "请输入模型编码",
            BasicInfoField::DsId => "请选择数据源",
            BasicInfoField::Remark => "请输入备注",
        }
    }

    pub fn trigger(self) -> ValidationTrigger {
        match self {
            BasicInfoField::ModelName | BasicInfoField::ModelEnName => ValidationTrigger::Blur,
            BasicInfoField::DsId | BasicInfoField::Remark => ValidationTrigger::Change,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Values held by the basic info form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDraftFields {
    pub model_name: String,
    pub model_en_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_id: Option<DataSourceId>,
    #[serde(default)]
    pub remark: String,
}

impl ModelDraftFields {
    /// Form values taken from the wizard's model state; missing values become empty
    pub fn from_snapshot(detail: &ModelDetail) -> Self {
        Self {
            model_name: detail.model_name.clone().unwrap_or_default(),
            model_en_name: detail.model_en_name.clone().unwrap_or_default(),
            ds_id: detail.ds_id,
            remark: detail.remark.clone().unwrap_or_default(),
        }
    }

    /// Text the validators see for a field; no selection is the empty string
    pub fn text(&self, field: BasicInfoField) -> String {
        match field {
            BasicInfoField::ModelName => self.model_name.clone(),
            BasicInfoField::ModelEnName => self.model_en_name.clone(),
            BasicInfoField::DsId => self.ds_id.map(|id| id.to_string()).unwrap_or_default(),
            BasicInfoField::Remark => self.remark.clone(),
        }
    }

    /// Set a field from its text form; unparsable data source ids clear the selection
    pub fn set_text(&mut self, field: BasicInfoField, value: String) {
        match field {
            BasicInfoField::ModelName => self.model_name = value,
            BasicInfoField::ModelEnName => self.model_en_name = value,
            BasicInfoField::DsId => self.ds_id = value.trim().parse().ok(),
            BasicInfoField::Remark => self.remark = value,
        }
    }

    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("modelName".into(), Value::from(self.model_name.clone()));
        map.insert("modelEnName".into(), Value::from(self.model_en_name.clone()));
        if let Some(id) = self.ds_id {
            map.insert("dsId".into(), Value::from(id));
        }
        map.insert("remark".into(), Value::from(self.remark.clone()));
        map
    }
}

/// Value handed to the wizard: form fields overlaid by the data source metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedValue(Map<String, Value>);

impl MergedValue {
    /// Metadata wins on key clashes, except for `id` which is never taken from it
    pub fn compose(fields: &ModelDraftFields, extra: &ExtraMetadata) -> Self {
        let mut map = fields.to_map();
        for (key, value) in extra.mergeable() {
            map.insert(key.clone(), value.clone());
        }
        Self(map)
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
