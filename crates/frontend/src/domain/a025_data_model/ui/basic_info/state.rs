use contracts::domain::a025_data_model::{
    BasicInfoField, DataModelId, DataSourceId, DataSourceItem, ExtraMetadata, FieldError,
    MergedValue, ModelDetail, ModelDraftFields,
};

/// Local state of the basic info form
///
/// Every edit bumps the field's revision. A validation result is only shown
/// if the field still has the revision it was checked at, so a slow remote
/// check cannot overwrite the status of a newer value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicInfoState {
    pub fields: ModelDraftFields,
    pub extra: ExtraMetadata,
    pub model_id: Option<DataModelId>,
    errors: [Option<String>; 4],
    revisions: [u64; 4],
}

impl BasicInfoState {
    /// Replace all form values with the wizard's snapshot.
    ///
    /// Unsaved local edits are discarded. Fields whose value changes lose
    /// their status and pending checks; fields the snapshot leaves as they
    /// were keep both, unless the model id itself changed. The data source
    /// metadata is kept; it only changes on a new selection.
    pub fn reset_from_snapshot(&mut self, detail: &ModelDetail) {
        let next = ModelDraftFields::from_snapshot(detail);
        let id_changed = self.model_id != detail.id;
        for field in BasicInfoField::ALL {
            if id_changed || self.fields.text(field) != next.text(field) {
                self.touch(field);
            }
        }
        self.fields = next;
        self.model_id = detail.id;
    }

    pub fn set_value(&mut self, field: BasicInfoField, value: String) {
        self.fields.set_text(field, value);
        self.touch(field);
    }

    /// Record a data source selection.
    ///
    /// `item` is the matching entry of the loaded list; without it the
    /// previous metadata stays in place.
    pub fn select_data_source(&mut self, ds_id: Option<DataSourceId>, item: Option<&DataSourceItem>) {
        self.fields.ds_id = ds_id;
        self.touch(BasicInfoField::DsId);
        match item {
            Some(item) => self.extra = item.metadata(),
            None => log::error!("data source {:?} is not in the loaded list, metadata kept", ds_id),
        }
    }

    pub fn revision(&self, field: BasicInfoField) -> u64 {
        self.revisions[field.index()]
    }

    /// Store a validation result taken at `revision`; returns false when it is stale
    pub fn apply_result(
        &mut self,
        field: BasicInfoField,
        revision: u64,
        result: &Result<(), FieldError>,
    ) -> bool {
        if self.revision(field) != revision {
            return false;
        }
        self.errors[field.index()] = result.as_ref().err().map(|e| e.to_string());
        true
    }

    pub fn error(&self, field: BasicInfoField) -> Option<String> {
        self.errors[field.index()].clone()
    }

    /// Form values merged with the selected data source metadata
    pub fn merged_value(&self) -> MergedValue {
        MergedValue::compose(&self.fields, &self.extra)
    }

    fn touch(&mut self, field: BasicInfoField) {
        let i = field.index();
        self.revisions[i] += 1;
        self.errors[i] = None;
    }
}
