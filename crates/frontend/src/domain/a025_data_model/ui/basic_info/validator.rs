//! Async validation of the basic info fields
//!
//! Local rules always run first; the uniqueness service is only asked when
//! they all pass. Fields are independent and may resolve in any order.

use contracts::domain::a025_data_model::{BasicInfoField, DataModelId, FieldError, ModelDraftFields};
use futures::future::join_all;

use super::model::BasicInfoApi;

/// Validate one field value; `model_id` keeps an edited model from clashing with itself
pub async fn validate_field(
    api: &dyn BasicInfoApi,
    field: BasicInfoField,
    value: &str,
    model_id: Option<DataModelId>,
) -> Result<(), FieldError> {
    field.check_local(value)?;

    let Some(check) = field.unique_check() else {
        return Ok(());
    };

    log::debug!("repeat_validate {} = {:?}", field.key(), value);
    let response = api
        .repeat_validate(check.request(value, model_id))
        .await
        .map_err(FieldError::Remote)?;
    check.verdict(&response)
}

/// Validate every field; failures are returned in form order
pub async fn validate_form(
    api: &dyn BasicInfoApi,
    fields: &ModelDraftFields,
    model_id: Option<DataModelId>,
) -> Vec<(BasicInfoField, Result<(), FieldError>)> {
    let checks = BasicInfoField::ALL.iter().map(|&field| async move {
        let value = fields.text(field);
        let result = validate_field(api, field, &value, model_id).await;
        (field, result)
    });
    join_all(checks).await
}

/// First failure in form order, as the message handed to the wizard
pub fn first_failure(results: &[(BasicInfoField, Result<(), FieldError>)]) -> Option<String> {
    results
        .iter()
        .find_map(|(_, result)| result.as_ref().err().map(|e| e.to_string()))
}
