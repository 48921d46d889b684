use crate::domain::a025_data_model::ui::DataModelModify;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <DataModelModify />
        </ConfigProvider>
    }
}
