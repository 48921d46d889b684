use super::handle::{BasicInfoHandle, BasicInfoRef};
use super::model::BasicInfoApi;
use super::view_model::{BasicInfoVm, ModelDetailUpdater};
use crate::shared::components::ui::{Input, Select, Textarea};
use contracts::domain::a025_data_model::{BasicInfoField, ModelDetail, WizardMode};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::{MessageBar, MessageBarIntent};

/// "Basic info" step of the data model wizard: name, code, data source, remark
#[component]
pub fn BasicInfo(
    /// Filled with this step's handle on mount
    handle: BasicInfoRef,
    /// Wizard model state; every change re-initializes the form
    #[prop(into)]
    model_detail: Signal<ModelDetail>,
    #[prop(into)]
    global_step: Signal<u32>,
    #[prop(into)]
    mode: Signal<WizardMode>,
    /// Receives a pure update of the wizard model state
    update_model_detail: Callback<ModelDetailUpdater>,
    /// Service override, HTTP by default
    #[prop(optional)]
    api: Option<Rc<dyn BasicInfoApi>>,
) -> impl IntoView {
    let vm = match api {
        Some(api) => BasicInfoVm::with_api(api),
        None => BasicInfoVm::new(),
    };
    handle.register(BasicInfoHandle::new(vm));
    vm.load_data_sources();

    Effect::new(move |_| {
        let detail = model_detail.get();
        vm.reset_from_snapshot(&detail);
    });

    // Code and data source are frozen once an edit has moved on
    let identity_locked = Signal::derive(move || mode.get().locks_identity(global_step.get()));

    view! {
        <div class="details-container basic-info">
            {move || vm.load_error.get().map(|e| view! {
                <div style="margin-bottom: var(--spacing-md);">
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                </div>
            })}

            <div class="details-form">
                <Input
                    id="modelName"
                    label=BasicInfoField::ModelName.label()
                    placeholder=BasicInfoField::ModelName.placeholder()
                    value=vm.field_value(BasicInfoField::ModelName)
                    error=vm.field_error(BasicInfoField::ModelName)
                    on_input=Callback::new(move |v| vm.on_input(BasicInfoField::ModelName, v))
                    on_blur=Callback::new(move |_| vm.on_blur(BasicInfoField::ModelName))
                    autocomplete="off"
                    required=true
                />

                <Input
                    id="modelEnName"
                    label=BasicInfoField::ModelEnName.label()
                    placeholder=BasicInfoField::ModelEnName.placeholder()
                    value=vm.field_value(BasicInfoField::ModelEnName)
                    error=vm.field_error(BasicInfoField::ModelEnName)
                    on_input=Callback::new(move |v| vm.on_input(BasicInfoField::ModelEnName, v))
                    on_blur=Callback::new(move |_| vm.on_blur(BasicInfoField::ModelEnName))
                    disabled=identity_locked
                    autocomplete="off"
                    required=true
                />

                <Select
                    id="dsId"
                    label=BasicInfoField::DsId.label()
                    placeholder=BasicInfoField::DsId.placeholder()
                    value=vm.field_value(BasicInfoField::DsId)
                    error=vm.field_error(BasicInfoField::DsId)
                    options=vm.data_source_options()
                    searchable=true
                    on_change=Callback::new(move |raw| vm.on_data_source_change(raw, update_model_detail))
                    disabled=identity_locked
                    required=true
                />

                <Textarea
                    id="remark"
                    label=BasicInfoField::Remark.label()
                    placeholder=BasicInfoField::Remark.placeholder()
                    value=vm.field_value(BasicInfoField::Remark)
                    error=vm.field_error(BasicInfoField::Remark)
                    on_input=Callback::new(move |v| vm.on_input(BasicInfoField::Remark, v))
                    rows=4
                />
            </div>
        </div>
    }
}
