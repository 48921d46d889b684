use async_trait::async_trait;
use contracts::domain::a025_data_model::{decode_data_sources, DataSourceItem, RepeatValidateRequest};
use contracts::shared::ApiResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const DATA_SOURCES_PATH: &str = "/api/data_model/data_sources";
const REPEAT_VALIDATE_PATH: &str = "/api/data_model/repeat_validate";

/// Fallback text when the data source service fails silently
const LOAD_FAILED: &str = "获取数据源失败";

/// Services the basic info step talks to
///
/// `Err` is a transport failure (request not sent, bad status, bad body);
/// service-level failures come back as `success: false` in the envelope.
#[async_trait(?Send)]
pub trait BasicInfoApi {
    async fn get_all_data_source_list(&self) -> Result<ApiResponse<Vec<DataSourceItem>>, String>;

    async fn repeat_validate(
        &self,
        request: RepeatValidateRequest,
    ) -> Result<ApiResponse<bool>, String>;
}

/// `BasicInfoApi` over HTTP
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBasicInfoApi;

#[async_trait(?Send)]
impl BasicInfoApi for HttpBasicInfoApi {
    async fn get_all_data_source_list(&self) -> Result<ApiResponse<Vec<DataSourceItem>>, String> {
        let response = Request::get(&api_url(DATA_SOURCES_PATH))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        let raw = response
            .json::<ApiResponse<Vec<serde_json::Value>>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        let (items, skipped) = decode_data_sources(raw.data.unwrap_or_default());
        for reason in &skipped {
            log::error!("skipped data source entry: {}", reason);
        }
        Ok(ApiResponse {
            success: raw.success,
            data: Some(items),
            message: raw.message,
        })
    }

    async fn repeat_validate(
        &self,
        request: RepeatValidateRequest,
    ) -> Result<ApiResponse<bool>, String> {
        let response = Request::post(&api_url(REPEAT_VALIDATE_PATH))
            .header("Accept", "application/json")
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json::<ApiResponse<bool>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Selector options, or the message to show when they cannot be loaded
pub async fn fetch_data_sources(api: &dyn BasicInfoApi) -> Result<Vec<DataSourceItem>, String> {
    let resp = api.get_all_data_source_list().await?;
    if !resp.success {
        return Err(resp.message_or(LOAD_FAILED));
    }
    let list = resp.data.unwrap_or_default();
    log::debug!("loaded {} data sources", list.len());
    Ok(list)
}
