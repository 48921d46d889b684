use super::view_model::BasicInfoVm;
use contracts::domain::a025_data_model::MergedValue;
use leptos::prelude::*;

/// Operations the wizard may call on the basic info step
#[derive(Clone, Copy)]
pub struct BasicInfoHandle {
    vm: BasicInfoVm,
}

impl BasicInfoHandle {
    pub(super) fn new(vm: BasicInfoVm) -> Self {
        Self { vm }
    }

    /// Run every field check, local and remote.
    ///
    /// Resolves with the form values merged with the selected data source
    /// metadata, or rejects with the first failure's message.
    pub async fn validate(&self) -> Result<MergedValue, String> {
        self.vm.validate().await
    }

    /// Same shape as `validate`, without checks and without waiting on the network
    pub fn get_value(&self) -> MergedValue {
        self.vm.get_value()
    }
}

/// Slot created by the wizard and handed to the step, which fills it on mount
#[derive(Clone, Copy)]
pub struct BasicInfoRef(StoredValue<Option<BasicInfoHandle>, LocalStorage>);

impl BasicInfoRef {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    pub(super) fn register(&self, handle: BasicInfoHandle) {
        self.0.set_value(Some(handle));
    }

    /// The step's handle, once it has been mounted
    pub fn get(&self) -> Option<BasicInfoHandle> {
        self.0.get_value()
    }
}

impl Default for BasicInfoRef {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::validator::tests::FakeApi;
    use super::super::view_model::ModelDetailUpdater;
    use super::*;
    use contracts::domain::a025_data_model::{DataSourceItem, ModelDetail};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn snapshot() -> ModelDetail {
        serde_json::from_value(json!({
            "modelName": "销售模型",
            "modelEnName": "sales_model",
            "dsId": 3,
            "remark": "",
            "schema": "dw",
            "tableName": "fact_sales",
            "joinList": [{"table": "dim_shop"}],
            "columnList": [{"name": "amount"}]
        }))
        .unwrap()
    }

    fn source(id: i64, extra: serde_json::Value) -> DataSourceItem {
        let mut value = json!({
            "id": id, "dsType": 1, "dsTypeName": "MySQL",
            "dsUrl": "jdbc:mysql://db:3306/dw", "name": "dw"
        });
        if let (Some(map), Some(ext)) = (value.as_object_mut(), extra.as_object()) {
            map.extend(ext.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    fn mounted(api: FakeApi) -> (BasicInfoVm, BasicInfoRef) {
        let vm = BasicInfoVm::with_api(Rc::new(api));
        let slot = BasicInfoRef::new();
        slot.register(BasicInfoHandle::new(vm));
        vm.reset_from_snapshot(&snapshot());
        (vm, slot)
    }

    #[test]
    fn test_selection_updates_wizard_and_value() {
        let owner = Owner::new();
        owner.set();

        let (vm, slot) = mounted(FakeApi::default());
        vm.data_sources.set(vec![source(5, json!({"driver": "mysql"}))]);

        let wizard = RwSignal::new(snapshot());
        let update = Callback::new(move |updater: ModelDetailUpdater| {
            wizard.update(|detail| *detail = updater(std::mem::take(detail)));
        });
        vm.select_data_source("5".into(), update);

        let detail = wizard.get_untracked();
        assert_eq!(detail.ds_id, Some(5));
        assert_eq!(detail.model_name.as_deref(), Some("销售模型"));
        assert_eq!(detail.schema, None);
        assert_eq!(detail.table_name, None);
        assert!(detail.join_list.is_empty());
        assert!(detail.column_list.is_empty());

        let value = slot.get().unwrap().get_value();
        assert_eq!(value.get("driver"), Some(&json!("mysql")));
        assert_eq!(value.get("dsId"), Some(&json!(5)));
        assert!(!value.contains_key("id"));
    }

    #[test]
    fn test_validate_resolves_with_merged_value() {
        let owner = Owner::new();
        owner.set();

        let (vm, slot) = mounted(FakeApi::default());
        vm.data_sources.set(vec![source(5, json!({"driver": "mysql"}))]);
        vm.select_data_source("5".into(), Callback::new(|_: ModelDetailUpdater| {}));

        let value = block_on(slot.get().unwrap().validate()).unwrap();
        assert_eq!(value.get("modelName"), Some(&json!("销售模型")));
        assert_eq!(value.get("modelEnName"), Some(&json!("sales_model")));
        assert_eq!(value.get("dsId"), Some(&json!(5)));
        assert_eq!(value.get("driver"), Some(&json!("mysql")));
        assert!(!value.contains_key("id"));
    }

    #[test]
    fn test_validate_rejects_with_first_message() {
        let owner = Owner::new();
        owner.set();

        let (vm, slot) = mounted(FakeApi {
            taken_names: vec!["销售模型".into()],
            ..Default::default()
        });

        let err = block_on(slot.get().unwrap().validate()).unwrap_err();
        assert_eq!(err, "模型名称已存在");
        assert_eq!(
            vm.state.with_untracked(|s| s.error(contracts::domain::a025_data_model::BasicInfoField::ModelName)),
            Some("模型名称已存在".to_string())
        );
    }

    #[test]
    fn test_get_value_does_not_call_services() {
        let owner = Owner::new();
        owner.set();

        let api = Rc::new(FakeApi::default());
        let vm = BasicInfoVm::with_api(api.clone());
        vm.reset_from_snapshot(&snapshot());

        let value = BasicInfoHandle::new(vm).get_value();
        assert_eq!(value.get("modelName"), Some(&json!("销售模型")));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_slot_before_mount() {
        let owner = Owner::new();
        owner.set();
        assert!(BasicInfoRef::new().get().is_none());
    }
}
