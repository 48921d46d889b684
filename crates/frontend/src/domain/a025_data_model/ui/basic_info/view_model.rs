use super::model::{fetch_data_sources, BasicInfoApi, HttpBasicInfoApi};
use super::state::BasicInfoState;
use super::validator::{first_failure, validate_field, validate_form};
use contracts::domain::a025_data_model::{
    BasicInfoField, DataSourceId, DataSourceItem, MergedValue, ModelDetail, ValidationTrigger,
};
use leptos::prelude::*;
use std::rc::Rc;

/// Pure update of the wizard's model state, applied by the wizard itself
pub type ModelDetailUpdater = Box<dyn FnOnce(ModelDetail) -> ModelDetail>;

/// ViewModel for the basic info step
#[derive(Clone, Copy)]
pub struct BasicInfoVm {
    pub state: RwSignal<BasicInfoState>,
    pub data_sources: RwSignal<Vec<DataSourceItem>>,
    /// Global (non-field) error, e.g. the data source list failed to load
    pub load_error: RwSignal<Option<String>>,
    api: StoredValue<Rc<dyn BasicInfoApi>, LocalStorage>,
}

impl BasicInfoVm {
    pub fn new() -> Self {
        Self::with_api(Rc::new(HttpBasicInfoApi))
    }

    pub fn with_api(api: Rc<dyn BasicInfoApi>) -> Self {
        Self {
            state: RwSignal::new(BasicInfoState::default()),
            data_sources: RwSignal::new(Vec::new()),
            load_error: RwSignal::new(None),
            api: StoredValue::new_local(api),
        }
    }

    fn api(&self) -> Rc<dyn BasicInfoApi> {
        self.api.get_value()
    }

    /// Load the selector options; a failure leaves the list empty
    pub fn load_data_sources(&self) {
        let api = self.api();
        let data_sources = self.data_sources;
        let load_error = self.load_error;

        wasm_bindgen_futures::spawn_local(async move {
            match fetch_data_sources(api.as_ref()).await {
                Ok(list) => data_sources.set(list),
                Err(e) => load_error.set(Some(e)),
            }
        });
    }

    /// Overwrite the form with the wizard's current model state
    pub fn reset_from_snapshot(&self, detail: &ModelDetail) {
        self.state.update(|s| s.reset_from_snapshot(detail));
    }

    pub fn field_value(&self, field: BasicInfoField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.fields.text(field)))
    }

    pub fn field_error(&self, field: BasicInfoField) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error(field)))
    }

    /// Options as (value, label) pairs
    pub fn data_source_options(&self) -> Signal<Vec<(String, String)>> {
        let data_sources = self.data_sources;
        Signal::derive(move || {
            data_sources.with(|list| {
                list.iter()
                    .map(|item| (item.id.to_string(), item.label()))
                    .collect()
            })
        })
    }

    pub fn on_input(&self, field: BasicInfoField, value: String) {
        self.state.update(|s| s.set_value(field, value));
        if field.trigger() == ValidationTrigger::Change {
            self.check_field(field);
        }
    }

    pub fn on_blur(&self, field: BasicInfoField) {
        if field.trigger() == ValidationTrigger::Blur {
            self.check_field(field);
        }
    }

    /// Validate one field in the background and show its result inline
    pub fn check_field(&self, field: BasicInfoField) {
        let (value, model_id, revision) = self
            .state
            .with_untracked(|s| (s.fields.text(field), s.model_id, s.revision(field)));
        let api = self.api();
        let state = self.state;

        wasm_bindgen_futures::spawn_local(async move {
            let result = validate_field(api.as_ref(), field, &value, model_id).await;
            state.update(|s| {
                if !s.apply_result(field, revision, &result) {
                    log::debug!("dropped stale validation result for {}", field.key());
                }
            });
        });
    }

    /// New data source picked: reset later wizard steps, then take its metadata
    pub fn select_data_source(&self, raw: String, update_model_detail: Callback<ModelDetailUpdater>) {
        let ds_id: Option<DataSourceId> = raw.trim().parse().ok();
        let fields = self.state.with_untracked(|s| s.fields.clone());

        update_model_detail.run(Box::new(move |prev| {
            ModelDetail::after_data_source_change(prev, &fields, ds_id)
        }));

        let item = self
            .data_sources
            .with_untracked(|list| list.iter().find(|item| Some(item.id) == ds_id).cloned());
        self.state.update(|s| s.select_data_source(ds_id, item.as_ref()));
    }

    pub fn on_data_source_change(&self, raw: String, update_model_detail: Callback<ModelDetailUpdater>) {
        self.select_data_source(raw, update_model_detail);
        self.check_field(BasicInfoField::DsId);
    }

    /// Full validation; resolves with the merged value or the first failure message
    pub async fn validate(&self) -> Result<MergedValue, String> {
        let (fields, model_id, revisions) = self.state.with_untracked(|s| {
            let revisions = BasicInfoField::ALL.map(|f| s.revision(f));
            (s.fields.clone(), s.model_id, revisions)
        });
        let api = self.api();

        let results = validate_form(api.as_ref(), &fields, model_id).await;

        self.state.update(|s| {
            for (field, result) in &results {
                s.apply_result(*field, revisions[field.index()], result);
            }
        });

        match first_failure(&results) {
            Some(message) => Err(message),
            None => Ok(self
                .state
                .with_untracked(|s| MergedValue::compose(&fields, &s.extra))),
        }
    }

    /// Current value without any validation
    pub fn get_value(&self) -> MergedValue {
        self.state.with_untracked(|s| s.merged_value())
    }
}

impl Default for BasicInfoVm {
    fn default() -> Self {
        Self::new()
    }
}
