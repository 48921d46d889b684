use crate::domain::a025_data_model::ui::basic_info::{BasicInfo, BasicInfoRef, ModelDetailUpdater};
use contracts::domain::a025_data_model::{MergedValue, ModelDetail, WizardMode};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

/// Merge a step value into the wizard state; the state is untouched on failure
fn absorb(model_detail: RwSignal<ModelDetail>, value: &MergedValue) -> Result<(), String> {
    let mut detail = model_detail.get_untracked();
    detail.absorb(value).map_err(|e| {
        log::error!("cannot merge basic info value: {}", e);
        format!("数据合并失败: {}", e)
    })?;
    model_detail.set(detail);
    Ok(())
}

/// Take the validated step value and move to the next step
fn complete_step(
    model_detail: RwSignal<ModelDetail>,
    global_step: RwSignal<u32>,
    value: &MergedValue,
) -> Result<(), String> {
    absorb(model_detail, value)?;
    global_step.update(|s| *s += 1);
    Ok(())
}

/// Data model wizard page.
///
/// Owns the model state, passes it down to the step and pulls the step's
/// value back through its handle. Later steps are not part of this page.
#[component]
pub fn DataModelModify(
    #[prop(optional)] initial: Option<ModelDetail>,
    #[prop(optional)] mode: WizardMode,
) -> impl IntoView {
    let model_detail = RwSignal::new(initial.unwrap_or_default());
    let global_step = RwSignal::new(0u32);
    let mode = RwSignal::new(mode);
    let error = RwSignal::new(None::<String>);
    let basic_info = BasicInfoRef::new();

    let update_model_detail = Callback::new(move |updater: ModelDetailUpdater| {
        model_detail.update(|detail| *detail = updater(std::mem::take(detail)));
    });

    let handle_next = move |_| {
        let Some(step) = basic_info.get() else {
            return;
        };
        error.set(None);
        leptos::task::spawn_local(async move {
            let outcome = match step.validate().await {
                Ok(value) => complete_step(model_detail, global_step, &value),
                Err(message) => Err(message),
            };
            if let Err(message) = outcome {
                error.set(Some(message));
            }
        });
    };

    let handle_save_draft = move |_| {
        if let Some(step) = basic_info.get() {
            error.set(absorb(model_detail, &step.get_value()).err());
        }
    };

    view! {
        <div class="page data-model-modify">
            <div class="details-header">
                <h3>
                    {move || match mode.get() {
                        WizardMode::Edit => "编辑模型",
                        WizardMode::Create => "新建模型",
                    }}
                </h3>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <BasicInfo
                handle=basic_info
                model_detail=model_detail
                global_step=global_step
                mode=mode
                update_model_detail=update_model_detail
            />

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=handle_save_draft>
                    "保存草稿"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=handle_next>
                    "下一步"
                </Button>
            </div>
        </div>
    }
}
