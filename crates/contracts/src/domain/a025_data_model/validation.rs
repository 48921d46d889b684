//! Field rules of the basic info step and the uniqueness-check contract

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::DataModelId;
use super::basic_info::BasicInfoField;
use crate::shared::validation::{run_rules, Rule};
use crate::shared::ApiResponse;

static MODEL_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_\x{4e00}-\x{9fa5}]+$").expect("valid model name pattern"));

static MODEL_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid model code pattern"));

static MODEL_NAME_RULES: [Rule; 3] = [
    Rule::Required("请输入模型名称"),
    Rule::MaxChars(50, "不超过50个字符"),
    Rule::Pattern(&MODEL_NAME_PATTERN, "仅支持中文、字母、数字和下划线"),
];

static MODEL_CODE_RULES: [Rule; 3] = [
    Rule::Required("请输入模型编码"),
    Rule::MaxChars(50, "不超过50个字符"),
    Rule::Pattern(&MODEL_CODE_PATTERN, "仅支持字母、数字和下划线"),
];

static DATA_SOURCE_RULES: [Rule; 1] = [Rule::Required("请选择数据源")];

static REMARK_RULES: [Rule; 1] = [Rule::MaxChars(200, "不超过200个字符")];

/// Shown when the uniqueness service fails without saying why
pub const REMOTE_CHECK_FALLBACK: &str = "校验失败";

/// Why a field is invalid; `Display` is the text shown next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required / length / charset rule
    #[error("{0}")]
    Rule(&'static str),
    /// Another model already uses the value
    #[error("{0}")]
    Duplicate(&'static str),
    /// Uniqueness service failed or could not be reached
    #[error("{0}")]
    Remote(String),
}

/// Field identifier understood by the uniqueness service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum FieldCode {
    ModelName = 1,
    ModelEnName = 2,
}

impl From<FieldCode> for u8 {
    fn from(value: FieldCode) -> Self {
        value as u8
    }
}

/// Body of the uniqueness check; `id` excludes the model being edited
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatValidateRequest {
    pub field_code: FieldCode,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DataModelId>,
}

/// Remote uniqueness check attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueCheck {
    pub code: FieldCode,
    pub exists_message: &'static str,
}

impl UniqueCheck {
    pub fn request(&self, value: &str, id: Option<DataModelId>) -> RepeatValidateRequest {
        RepeatValidateRequest {
            field_code: self.code,
            value: value.to_string(),
            id,
        }
    }

    /// `data: true` means a conflicting record exists
    pub fn verdict(&self, response: &ApiResponse<bool>) -> Result<(), FieldError> {
        match (response.success, response.data) {
            (true, Some(true)) => Err(FieldError::Duplicate(self.exists_message)),
            (true, _) => Ok(()),
            (false, _) => Err(FieldError::Remote(response.message_or(REMOTE_CHECK_FALLBACK))),
        }
    }
}

impl BasicInfoField {
    pub fn rules(self) -> &'static [Rule] {
        match self {
            BasicInfoField::ModelName => &MODEL_NAME_RULES,
            BasicInfoField::ModelEnName => &MODEL_CODE_RULES,
            BasicInfoField::DsId => &DATA_SOURCE_RULES,
            BasicInfoField::Remark => &REMARK_RULES,
        }
    }

    pub fn unique_check(self) -> Option<UniqueCheck> {
        match self {
            BasicInfoField::ModelName => Some(UniqueCheck {
                code: FieldCode::ModelName,
                exists_message: "模型名称已存在",
            }),
            BasicInfoField::ModelEnName => Some(UniqueCheck {
                code: FieldCode::ModelEnName,
                exists_message: "模型编码已存在",
            }),
            BasicInfoField::DsId | BasicInfoField::Remark => None,
        }
    }

    /// Synchronous part of the field's validation
    pub fn check_local(self, value: &str) -> Result<(), FieldError> {
        run_rules(self.rules(), value).map_err(FieldError::Rule)
    }
}
